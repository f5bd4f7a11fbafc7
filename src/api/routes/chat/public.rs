//! Public types for the chat API
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::Turn;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    /// Model selection is accepted but the backend's configured default is
    /// always used.
    pub model: Option<String>,
    /// Base64-or-URL media attachment. Accepted but not processed.
    pub media: Option<String>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub conversation: Vec<Turn>,
}

#[derive(Serialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Turn>,
}

#[derive(Serialize, Clone)]
pub struct ChatSession {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub turns: usize,
}

#[derive(Deserialize)]
pub struct ChatSessionsQuery {
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct ChatSessionsResponse {
    pub sessions: Vec<ChatSession>,
    pub page: usize,
    pub limit: usize,
    pub total_sessions: usize,
    pub total_pages: usize,
}
