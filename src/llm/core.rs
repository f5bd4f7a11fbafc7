use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Generation request timed out")]
    Timeout,
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl From<reqwest::Error> for GenerateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GenerateError::Timeout
        } else {
            GenerateError::Upstream(err.into())
        }
    }
}

/// Boundary to the language-model backend. Implementations take a fully
/// rendered prompt and return the next reply.
#[async_trait]
pub trait Generate: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Backend speaking the OpenAI-compatible chat completions API. The prompt
/// is sent as a single user message and the reply is the first choice's
/// content. Always calls with the configured model.
pub struct OpenAiChat {
    client: reqwest::Client,
    api_hostname: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl OpenAiChat {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl Generate for OpenAiChat {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let payload = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
        });
        let url = format!(
            "{}/v1/chat/completions",
            self.api_hostname.trim_end_matches("/")
        );
        let response: Value = self
            .client
            .post(url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        if let Some(content) = response["choices"][0]["message"]["content"].as_str() {
            return Ok(content.to_string());
        }

        // Error payloads come back as {"error": {"message": ...}}
        if let Some(message) = response["error"]["message"].as_str() {
            return Err(GenerateError::Upstream(anyhow!(
                "Completion request failed: {}",
                message
            )));
        }

        Err(GenerateError::Upstream(anyhow!(
            "No message received. Resp:\n\n {}",
            response
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_generate_basic() {
        let mut server = mockito::Server::new_async().await;

        let response_body = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1694268190,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "Hello!"
                },
                "finish_reason": "stop"
            }]
        }"#;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response_body)
            .create();

        let backend = OpenAiChat::new(server.url().as_str(), "test-key", "gpt-4", 30);
        let result = backend.generate("User: Hi\n").await;

        mock.assert();
        assert_eq!(result.unwrap(), "Hello!");
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_as_single_user_message() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "gpt-4",
                "messages": [{"role": "user", "content": "User: hi\nAssistant: hello!\nUser: more\n"}]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#)
            .create();

        let backend = OpenAiChat::new(server.url().as_str(), "test-key", "gpt-4", 30);
        let result = backend
            .generate("User: hi\nAssistant: hello!\nUser: more\n")
            .await;

        mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_generate_surfaces_upstream_error_message() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": {"message": "Rate limit reached", "type": "requests"}}"#)
            .create();

        let backend = OpenAiChat::new(server.url().as_str(), "test-key", "gpt-4", 30);
        let err = backend.generate("User: Hi\n").await.unwrap_err();

        mock.assert();
        match err {
            GenerateError::Upstream(e) => {
                assert!(e.to_string().contains("Rate limit reached"));
            }
            GenerateError::Timeout => panic!("Expected Upstream variant"),
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_content() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant"}}]}"#)
            .create();

        let backend = OpenAiChat::new(server.url().as_str(), "test-key", "gpt-4", 30);
        let err = backend.generate("User: Hi\n").await.unwrap_err();

        mock.assert();
        assert!(matches!(err, GenerateError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_generate_handles_trailing_slash_hostname() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/v1/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"ok"}}]}"#)
            .create();

        let hostname = format!("{}/", server.url());
        let backend = OpenAiChat::new(&hostname, "test-key", "gpt-4", 30);
        let result = backend.generate("User: Hi\n").await;

        mock.assert();
        assert_eq!(result.unwrap(), "ok");
    }
}
