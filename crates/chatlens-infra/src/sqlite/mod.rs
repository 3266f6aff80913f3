//! SQLite repository implementations.

pub mod chat;
pub mod message;
pub mod pool;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

use chatlens_types::error::RepositoryError;
use chrono::{DateTime, Utc};

pub use chat::SqliteChatRepository;
pub use message::SqliteMessageRepository;
pub use pool::DatabasePool;
pub use user::SqliteUserRepository;

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

pub(crate) fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub(crate) fn parse_uuid(s: &str, field: &str) -> Result<uuid::Uuid, RepositoryError> {
    uuid::Uuid::parse_str(s)
        .map_err(|e| RepositoryError::Query(format!("invalid {field}: {e}")))
}
