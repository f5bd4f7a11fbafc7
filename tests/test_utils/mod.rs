//! Test utilities for integration tests
use std::sync::Arc;

use axum::{Router, body::Body};

use chat_relay::api::AppState;
use chat_relay::api::app;
use chat_relay::core::AppConfig;

/// Creates a test application router wired to the given chat completions
/// hostname, usually a `mockito` server URL. Each call builds a fresh
/// session store so tests are isolated from each other.
pub fn test_app(llm_api_hostname: &str) -> Router {
    let app_config = AppConfig {
        llm_api_hostname: llm_api_hostname.to_string(),
        llm_api_key: String::from("test-api-key"),
        llm_model: String::from("gpt-4o"),
        llm_timeout_secs: 5,
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not UTF-8")
}
