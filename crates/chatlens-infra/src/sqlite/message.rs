//! SQLite message repository implementation.
//!
//! Messages store their `parts` sequence as a JSON text column; rows map
//! through private Row structs like the chat repository. The digest query
//! joins messages with their owning chat to carry the chat owner's user id.

use chatlens_core::repository::{DigestRow, MessageRepository};
use chatlens_types::error::RepositoryError;
use chatlens_types::message::{Message, MessagePart, MessageRole};
use chatlens_types::vote::Vote;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{parse_datetime, parse_uuid};

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn parse_parts(raw: &str) -> Result<Vec<MessagePart>, RepositoryError> {
    serde_json::from_str(raw).map_err(|e| RepositoryError::Query(format!("invalid parts: {e}")))
}

fn parse_role(raw: &str) -> Result<MessageRole, RepositoryError> {
    raw.parse().map_err(|e: String| RepositoryError::Query(e))
}

/// Internal row type for mapping SQLite rows to domain Message.
struct MessageRow {
    id: String,
    chat_id: String,
    role: String,
    parts: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            chat_id: row.try_get("chat_id")?,
            role: row.try_get("role")?,
            parts: row.try_get("parts")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, RepositoryError> {
        Ok(Message {
            id: parse_uuid(&self.id, "message id")?,
            chat_id: parse_uuid(&self.chat_id, "chat_id")?,
            role: parse_role(&self.role)?,
            parts: parse_parts(&self.parts)?,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl MessageRepository for SqliteMessageRepository {
    async fn messages_for_chat(&self, chat_id: &Uuid) -> Result<Vec<Message>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE chat_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(chat_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let msg_row =
                MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            messages.push(msg_row.into_message()?);
        }

        Ok(messages)
    }

    async fn votes_for_chat(&self, chat_id: &Uuid) -> Result<Vec<Vote>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT v.message_id, v.is_upvoted FROM votes v \
             JOIN messages m ON v.message_id = m.id \
             WHERE m.chat_id = ? ORDER BY v.message_id ASC",
        )
        .bind(chat_id.to_string())
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut votes = Vec::with_capacity(rows.len());
        for row in &rows {
            let message_id: String = row
                .try_get("message_id")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let is_upvoted: i64 = row
                .try_get("is_upvoted")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            votes.push(Vote {
                message_id: parse_uuid(&message_id, "message_id")?,
                is_upvoted: is_upvoted != 0,
            });
        }

        Ok(votes)
    }

    async fn user_message_rows(
        &self,
        chat_id: Option<&Uuid>,
    ) -> Result<Vec<DigestRow>, RepositoryError> {
        let mut sql = String::from(
            "SELECT m.parts, c.user_id, m.created_at, m.role \
             FROM messages m JOIN chats c ON m.chat_id = c.id \
             WHERE m.role = 'user'",
        );
        if chat_id.is_some() {
            sql.push_str(" AND m.chat_id = ?");
        }
        sql.push_str(" ORDER BY m.created_at DESC, m.id DESC");

        let mut query = sqlx::query(&sql);
        if let Some(id) = chat_id {
            query = query.bind(id.to_string());
        }

        let rows = query
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut digest_rows = Vec::with_capacity(rows.len());
        for row in &rows {
            let parts: String = row
                .try_get("parts")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let user_id: String = row
                .try_get("user_id")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let created_at: String = row
                .try_get("created_at")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let role: String = row
                .try_get("role")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

            digest_rows.push(DigestRow {
                parts: parse_parts(&parts)?,
                user_id: parse_uuid(&user_id, "user_id")?,
                created_at: parse_datetime(&created_at)?,
                role: parse_role(&role)?,
            });
        }

        Ok(digest_rows)
    }
}
