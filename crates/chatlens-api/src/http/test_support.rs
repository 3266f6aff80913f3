//! Handler test fixtures: an AppState over a tempfile database plus raw-SQL
//! seeding helpers.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::state::AppState;

pub(crate) async fn test_state() -> AppState {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    // Leak tempdir so it lives for the test
    std::mem::forget(dir);
    AppState::init(Some(url)).await.unwrap()
}

pub(crate) async fn seed_user(state: &AppState, email: &str) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO users (id, email) VALUES (?, ?)")
        .bind(id.to_string())
        .bind(email)
        .execute(&state.db_pool.writer)
        .await
        .unwrap();
    id
}

pub(crate) async fn seed_chat(
    state: &AppState,
    user_id: Uuid,
    title: &str,
    created_at: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO chats (id, user_id, title, created_at) VALUES (?, ?, ?, ?)")
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(title)
        .bind(created_at.to_rfc3339())
        .execute(&state.db_pool.writer)
        .await
        .unwrap();
    id
}

pub(crate) async fn seed_message(
    state: &AppState,
    chat_id: Uuid,
    role: &str,
    parts: serde_json::Value,
    created_at: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO messages (id, chat_id, role, parts, created_at) VALUES (?, ?, ?, ?, ?)")
        .bind(id.to_string())
        .bind(chat_id.to_string())
        .bind(role)
        .bind(parts.to_string())
        .bind(created_at.to_rfc3339())
        .execute(&state.db_pool.writer)
        .await
        .unwrap();
    id
}

pub(crate) async fn seed_vote(state: &AppState, message_id: Uuid, is_upvoted: bool) {
    sqlx::query("INSERT INTO votes (message_id, is_upvoted) VALUES (?, ?)")
        .bind(message_id.to_string())
        .bind(is_upvoted as i64)
        .execute(&state.db_pool.writer)
        .await
        .unwrap();
}
