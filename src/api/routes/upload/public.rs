//! Public types for the media upload API
use serde::Serialize;

/// Summary of an accepted upload. The payload itself is not stored or
/// decoded.
#[derive(Serialize)]
pub struct UploadResponse {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}
