//! Per-chat handlers: transcript, votes, deletion.
//!
//! Endpoints:
//! - GET    /chats/{chatId}/messages - Messages in chronological order
//! - GET    /chats/{chatId}/votes    - Votes cast on the chat's messages
//! - DELETE /chat?id={chatId}        - Delete a chat (cascades to messages/votes)

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use chatlens_types::message::Message;
use chatlens_types::vote::Vote;

use crate::http::error::AppError;
use crate::http::handlers::parse_uuid;
use crate::state::AppState;

/// GET /chats/{chatId}/messages - A chat's messages, oldest-first.
///
/// An unknown chat id yields an empty array, not an error.
pub async fn chat_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<Json<Vec<Message>>, AppError> {
    let chat_id = parse_uuid(&chat_id)?;
    let messages = state.conversations.messages_for_chat(&chat_id).await?;
    Ok(Json(messages))
}

/// GET /chats/{chatId}/votes - Votes on a chat's messages.
pub async fn chat_votes(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> Result<Json<Vec<Vote>>, AppError> {
    let chat_id = parse_uuid(&chat_id)?;
    let votes = state.conversations.votes_for_chat(&chat_id).await?;
    Ok(Json(votes))
}

/// Query parameters for chat deletion.
#[derive(Debug, Deserialize)]
pub struct DeleteChatQuery {
    pub id: Option<String>,
}

/// DELETE /chat?id= - Delete a chat and everything under it.
///
/// 204 on success, 404 if the chat does not exist, 400 without an id.
pub async fn delete_chat(
    State(state): State<AppState>,
    Query(query): Query<DeleteChatQuery>,
) -> Result<StatusCode, AppError> {
    let raw = query
        .id
        .ok_or_else(|| AppError::Validation("Missing required 'id' parameter".to_string()))?;
    let chat_id = parse_uuid(&raw)?;

    state.conversations.delete_chat(&chat_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
