//! Router for the model listing API

use std::sync::Arc;

use axum::{Router, extract::State, response::Json, routing::get};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<AppState>;

/// List the available models. A static single-entry list; the backend's
/// capabilities are not enumerated.
async fn list_models(State(state): State<SharedState>) -> Json<public::ModelsResponse> {
    Json(public::ModelsResponse {
        models: vec![state.config.llm_model.clone()],
    })
}

/// Create the models router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(list_models))
}
