//! SQLite user repository implementation.
//!
//! Read-only: user rows are written by the external auth system.

use chatlens_core::repository::UserRepository;
use chatlens_types::error::RepositoryError;
use chatlens_types::user::User;
use sqlx::Row;
use uuid::Uuid;

use super::parse_uuid;
use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

fn user_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<User, RepositoryError> {
    let id: String = row
        .try_get("id")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| RepositoryError::Query(e.to_string()))?;
    Ok(User {
        id: parse_uuid(&id, "user id")?,
        email,
    })
}

impl UserRepository for SqliteUserRepository {
    async fn list_users(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query("SELECT id, email FROM users ORDER BY email ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows.iter().map(user_from_row).collect()
    }

    async fn get_user(&self, user_id: &Uuid) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT id, email FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        row.as_ref().map(user_from_row).transpose()
    }
}
