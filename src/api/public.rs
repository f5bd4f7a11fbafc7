//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

use crate::llm::GenerateError;

// Errors

/// Error kinds surfaced by the API, each with its own status code. The
/// response body is always `{"detail": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Something went wrong: {0}")]
    Upstream(anyhow::Error),
    #[error("Generation request timed out")]
    Timeout,
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self);

        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
        };

        (status, axum::Json(json!({"detail": self.to_string()}))).into_response()
    }
}

impl From<GenerateError> for ApiError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::Timeout => ApiError::Timeout,
            GenerateError::Upstream(e) => ApiError::Upstream(e),
        }
    }
}


// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod models {
    pub use crate::api::routes::models::public::*;
}

pub mod upload {
    pub use crate::api::routes::upload::public::*;
}
