//! Shared fixtures for the sqlite repository tests: a tempfile-backed pool
//! and raw-SQL seeding of users, chats, messages, and votes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::format_datetime;
use super::pool::DatabasePool;

pub(crate) async fn test_pool() -> DatabasePool {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());
    // Leak tempdir so it lives for the test
    std::mem::forget(dir);
    DatabasePool::new(&url).await.unwrap()
}

pub(crate) async fn seed_user(pool: &DatabasePool, email: &str) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO users (id, email) VALUES (?, ?)")
        .bind(id.to_string())
        .bind(email)
        .execute(&pool.writer)
        .await
        .unwrap();
    id
}

pub(crate) async fn seed_chat(
    pool: &DatabasePool,
    user_id: Uuid,
    title: &str,
    created_at: DateTime<Utc>,
) -> Uuid {
    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO chats (id, user_id, title, created_at) VALUES (?, ?, ?, ?)")
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(title)
        .bind(format_datetime(&created_at))
        .execute(&pool.writer)
        .await
        .unwrap();
    id
}

pub(crate) async fn seed_message(
    pool: &DatabasePool,
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
        .bind(format_datetime(&created_at))
        .execute(&pool.writer)
        .await
        .unwrap();
    id
}

pub(crate) async fn seed_vote(pool: &DatabasePool, message_id: Uuid, is_upvoted: bool) {
    sqlx::query("INSERT INTO votes (message_id, is_upvoted) VALUES (?, ?)")
        .bind(message_id.to_string())
        .bind(is_upvoted as i64)
        .execute(&pool.writer)
        .await
        .unwrap();
}

/// Parts payload holding a single text segment.
pub(crate) fn text_parts(text: &str) -> serde_json::Value {
    serde_json::json!([{"type": "text", "text": text}])
}
