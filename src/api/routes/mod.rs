//! API routes module

pub mod chat;
pub mod models;
pub mod upload;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .nest("/chat", chat::router())
        // Model listing routes
        .nest("/models", models::router())
        // Media upload routes
        .nest("/upload", upload::router())
}
