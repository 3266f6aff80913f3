//! User listing handlers.
//!
//! Endpoints:
//! - GET /users                        - All user accounts
//! - GET /users/{userId}/chats         - A user's chats, newest-first
//! - GET /users/{userId}/conversations - Alias of the above, kept for the
//!                                       conversation-selector call shape

use axum::Json;
use axum::extract::{Path, State};

use chatlens_core::repository::UserRepository;
use chatlens_types::chat::Chat;
use chatlens_types::user::User;

use crate::http::error::AppError;
use crate::http::handlers::parse_uuid;
use crate::state::AppState;

/// GET /users - List all users, ordered by email.
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}

/// GET /users/{userId}/chats - A user's chats, newest-first, capped at 100.
///
/// An unknown user id yields an empty array, not an error.
pub async fn user_chats(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Chat>>, AppError> {
    let user_id = parse_uuid(&user_id)?;
    let chats = state.conversations.chats_for_user(&user_id).await?;
    Ok(Json(chats))
}
