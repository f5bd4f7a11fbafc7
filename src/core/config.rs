use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub llm_api_hostname: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let llm_api_hostname = env::var("CHAT_RELAY_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let llm_api_key =
            env::var("OPENAI_API_KEY").unwrap_or_else(|_| "thiswontworkforopenai".to_string());
        let llm_model =
            env::var("CHAT_RELAY_LLM_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());
        let llm_timeout_secs = env::var("CHAT_RELAY_LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        Self {
            llm_api_hostname,
            llm_api_key,
            llm_model,
            llm_timeout_secs,
        }
    }
}
