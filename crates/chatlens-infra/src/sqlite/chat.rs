//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `chatlens-core` using sqlx with split
//! read/write pools: raw queries, private Row structs, reader pool for
//! SELECTs and the writer pool for the single write path (delete).
//!
//! Pagination orders by `(created_at, id)` descending and compares cursors
//! against the same compound key, so chats sharing a timestamp still page
//! deterministically. Timestamps are RFC 3339 text and ids are UUID text;
//! both compare correctly as strings.

use chatlens_core::repository::{ChatRepository, PageBoundary, PageDirection};
use chatlens_types::chat::Chat;
use chatlens_types::error::RepositoryError;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime, parse_uuid};

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain Chat.
struct ChatRow {
    id: String,
    user_id: String,
    title: String,
    created_at: String,
}

impl ChatRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_chat(self) -> Result<Chat, RepositoryError> {
        Ok(Chat {
            id: parse_uuid(&self.id, "chat id")?,
            user_id: parse_uuid(&self.user_id, "user_id")?,
            title: self.title,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

fn collect_chats(rows: &[sqlx::sqlite::SqliteRow]) -> Result<Vec<Chat>, RepositoryError> {
    let mut chats = Vec::with_capacity(rows.len());
    for row in rows {
        let chat_row =
            ChatRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
        chats.push(chat_row.into_chat()?);
    }
    Ok(chats)
}

impl ChatRepository for SqliteChatRepository {
    async fn get_chat(&self, chat_id: &Uuid) -> Result<Option<Chat>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM chats WHERE id = ?")
            .bind(chat_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let chat_row =
                    ChatRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(chat_row.into_chat()?))
            }
            None => Ok(None),
        }
    }

    async fn chats_for_user(
        &self,
        user_id: &Uuid,
        limit: i64,
    ) -> Result<Vec<Chat>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT * FROM chats WHERE user_id = ? ORDER BY created_at DESC, id DESC LIMIT ?",
        )
        .bind(user_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        collect_chats(&rows)
    }

    async fn chats_page(
        &self,
        user_id: &Uuid,
        limit: i64,
        boundary: Option<&PageBoundary>,
    ) -> Result<Vec<Chat>, RepositoryError> {
        let rows = match boundary {
            None => {
                sqlx::query(
                    "SELECT * FROM chats WHERE user_id = ? \
                     ORDER BY created_at DESC, id DESC LIMIT ?",
                )
                .bind(user_id.to_string())
                .bind(limit)
                .fetch_all(&self.pool.reader)
                .await
            }
            Some(b) => {
                let cmp = match b.direction {
                    PageDirection::Older => "<",
                    PageDirection::Newer => ">",
                };
                let sql = format!(
                    "SELECT * FROM chats WHERE user_id = ? \
                     AND (created_at {cmp} ? OR (created_at = ? AND id {cmp} ?)) \
                     ORDER BY created_at DESC, id DESC LIMIT ?"
                );
                let anchor_at = format_datetime(&b.created_at);
                sqlx::query(&sql)
                    .bind(user_id.to_string())
                    .bind(&anchor_at)
                    .bind(&anchor_at)
                    .bind(b.id.to_string())
                    .bind(limit)
                    .fetch_all(&self.pool.reader)
                    .await
            }
        }
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        collect_chats(&rows)
    }

    async fn delete_chat(&self, chat_id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = ?")
            .bind(chat_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
