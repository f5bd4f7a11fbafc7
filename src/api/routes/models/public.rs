//! Public types for the model listing API
use serde::Serialize;

/// Response listing the models this service can relay to
#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}
