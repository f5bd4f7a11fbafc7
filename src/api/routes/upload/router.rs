//! Router for the media upload API

use std::sync::Arc;

use axum::{Router, extract::Multipart, response::Json, routing::post};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// Accept a multimedia upload and report what was received. The file is
/// read to measure its size and then discarded.
async fn upload_media(mut multipart: Multipart) -> Result<Json<public::UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(format!("Failed to read upload: {}", e)))?;

        tracing::debug!(
            "Received upload {:?} ({} bytes), not persisted",
            filename,
            data.len()
        );

        return Ok(Json(public::UploadResponse {
            filename,
            content_type,
            size: data.len(),
        }));
    }

    Err(ApiError::Validation(
        "Missing file field in multipart request".to_string(),
    ))
}

/// Create the upload router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(upload_media))
}
