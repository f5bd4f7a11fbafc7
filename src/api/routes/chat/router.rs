//! Router for the chat API

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public;
use crate::api::state::AppState;
use crate::session::{Turn, render_prompt};

type SharedState = Arc<AppState>;

/// Initiate or add to a chat session and return the reply together with the
/// updated transcript
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<axum::Json<public::ChatResponse>, crate::api::public::ApiError> {
    let public::ChatRequest {
        session_id,
        message,
        model,
        media,
    } = payload;

    if let Some(requested) = &model {
        tracing::debug!(
            "Requested model {} not supported, using the configured default",
            requested
        );
    }
    if media.is_some() {
        tracing::debug!("Media attachment on session {} ignored", session_id);
    }

    let session = state.store.get_or_create(&session_id);

    // Hold the transcript lock across the whole generation round so a
    // concurrent call on the same session cannot interleave its turns
    let mut transcript = session.transcript_mut().await;
    transcript.push(Turn::user(&message));

    let prompt = render_prompt(&transcript);

    // On failure the user turn stays in the transcript with no assistant
    // turn following it
    let reply = state.generator.generate(&prompt).await?;

    transcript.push(Turn::assistant(&reply));

    Ok(axum::Json(public::ChatResponse {
        reply,
        conversation: transcript.clone(),
    }))
}

/// Get the transcript of a single chat session by ID
async fn chat_session(State(state): State<SharedState>, Path(id): Path<String>) -> impl IntoResponse {
    let Some(session) = state.store.get(&id) else {
        return (
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response();
    };

    let transcript = session.transcript().await;
    axum::Json(public::ChatTranscriptResponse { transcript }).into_response()
}

/// Get a list of all chat sessions
async fn chat_list(
    State(state): State<SharedState>,
    Query(params): Query<public::ChatSessionsQuery>,
) -> axum::Json<public::ChatSessionsResponse> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(20).max(1);
    let offset = (page - 1) * limit;

    let all_sessions = state.store.list();
    let total_sessions = all_sessions.len();
    let total_pages = total_sessions.div_ceil(limit);

    let mut sessions = Vec::new();
    for session in all_sessions.into_iter().skip(offset).take(limit) {
        sessions.push(public::ChatSession {
            id: session.id.clone(),
            created_at: session.created_at,
            turns: session.turn_count().await,
        });
    }

    axum::Json(public::ChatSessionsResponse {
        sessions,
        page,
        limit,
        total_sessions,
        total_pages,
    })
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_session))
        .route("/sessions", get(chat_list))
}
