//! HTTP request handlers.

pub mod chat;
pub mod digest;
pub mod history;
pub mod user;

use uuid::Uuid;

use crate::http::error::AppError;

/// Parse a UUID from a path or query parameter, returning a 400 error on
/// invalid format.
pub(crate) fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    s.parse::<Uuid>()
        .map_err(|_| AppError::Validation(format!("Invalid UUID: {s}")))
}
