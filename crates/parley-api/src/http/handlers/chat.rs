//! Chat transcript HTTP handlers.
//!
//! Endpoints (all behind the bearer-token gate):
//! - POST   /api/chat         - Append a turn, returns 201 `{messages: [user, assistant]}`
//! - GET    /api/chat/history - Full transcript, oldest first
//! - DELETE /api/chat/history - Clear the transcript, returns `{success: true}`

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use parley_types::chat::Message;

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::state::AppState;

/// Request body for appending a turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub content: String,
}

/// Response envelope for message lists.
#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

/// POST /api/chat - Append one conversation turn.
pub async fn send_message(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(req): Json<ChatRequest>,
) -> Result<(StatusCode, Json<MessagesResponse>), AppError> {
    let (user_msg, assistant_msg) = state
        .transcript_engine
        .append_turn(&user_id, &req.content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessagesResponse {
            messages: vec![user_msg, assistant_msg],
        }),
    ))
}

/// GET /api/chat/history - All of the caller's messages, oldest first.
pub async fn get_history(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<MessagesResponse>, AppError> {
    let messages = state.transcript_engine.history(&user_id).await?;
    Ok(Json(MessagesResponse { messages }))
}

/// DELETE /api/chat/history - Clear the caller's transcript. Idempotent.
pub async fn clear_history(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<serde_json::Value>, AppError> {
    state.transcript_engine.clear_history(&user_id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
