//! Caller identity extractor.
//!
//! Authentication itself is delegated to an external auth proxy, which
//! forwards the verified operator's user id in the `x-operator-id` header.
//! Routes that need an identity extract this type; a missing or malformed
//! header rejects with 401.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::http::error::AppError;

/// Header carrying the verified caller's user id.
pub const OPERATOR_ID_HEADER: &str = "x-operator-id";

/// The authenticated operator behind a request.
#[derive(Debug, Clone, Copy)]
pub struct OperatorIdentity {
    pub user_id: Uuid,
}

impl<S: Send + Sync> FromRequestParts<S> for OperatorIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts.headers.get(OPERATOR_ID_HEADER).ok_or_else(|| {
            AppError::Unauthorized(format!("Missing '{OPERATOR_ID_HEADER}' header"))
        })?;

        let value = raw.to_str().map_err(|_| {
            AppError::Unauthorized(format!("Invalid '{OPERATOR_ID_HEADER}' header encoding"))
        })?;

        let user_id = value.trim().parse::<Uuid>().map_err(|_| {
            AppError::Unauthorized(format!(
                "'{OPERATOR_ID_HEADER}' header is not a valid user id"
            ))
        })?;

        Ok(OperatorIdentity { user_id })
    }
}
