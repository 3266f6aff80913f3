//! Application error type mapping to HTTP status codes.
//!
//! Response bodies carry a machine-readable `code` and a human-readable
//! `message`. Store failures map to an opaque 500: the underlying error is
//! logged server-side, never echoed to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chatlens_types::error::{HistoryError, RepositoryError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bad request input (conflicting cursors, malformed ids or limits).
    Validation(String),
    /// Missing or malformed caller identity.
    Unauthorized(String),
    /// A structurally required resource does not exist.
    NotFound,
    /// Store failure; details stay server-side.
    Repository(RepositoryError),
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound => AppError::NotFound,
            other => AppError::Repository(other),
        }
    }
}

impl From<HistoryError> for AppError {
    fn from(e: HistoryError) -> Self {
        match e {
            HistoryError::UnknownCursor(id) => {
                AppError::Validation(format!("unknown cursor chat id: {id}"))
            }
            HistoryError::InvalidLimit(limit) => {
                AppError::Validation(format!("limit must be at least 1, got {limit}"))
            }
            HistoryError::Repository(e) => e.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Resource not found".to_string(),
            ),
            AppError::Repository(e) => {
                tracing::error!(error = %e, "store error while serving request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let body = json!({
            "code": code,
            "message": message,
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_is_opaque() {
        let err = AppError::Repository(RepositoryError::Query(
            "SQLITE_ERROR near line 3".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_passthrough_from_repository() {
        let err: AppError = RepositoryError::NotFound.into();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_history_cursor_error_is_validation() {
        let err: AppError = HistoryError::UnknownCursor(uuid::Uuid::now_v7()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
