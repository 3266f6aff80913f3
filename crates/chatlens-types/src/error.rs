use thiserror::Error;

/// Errors from repository operations (used by trait definitions in chatlens-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from the history pagination service.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The caller supplied a cursor anchored at a chat id that does not exist.
    #[error("unknown cursor chat id: {0}")]
    UnknownCursor(uuid::Uuid),

    /// The requested page size is not a positive number.
    #[error("invalid page limit: {0}")]
    InvalidLimit(i64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
