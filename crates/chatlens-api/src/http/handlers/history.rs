//! History pagination handler.
//!
//! GET /history?limit=&starting_after=&ending_before=&userId=
//!
//! Pages the target user's chats newest-first. The target is the `userId`
//! query parameter when present, otherwise the caller's own identity. At
//! most one cursor direction may be supplied.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use chatlens_types::chat::{ChatPage, HistoryCursor};

use crate::http::error::AppError;
use crate::http::extractors::identity::OperatorIdentity;
use crate::http::handlers::parse_uuid;
use crate::state::AppState;

/// Page size used when the caller supplies no (or an unparseable) limit.
const DEFAULT_LIMIT: i64 = 10;

/// Query parameters for the history page.
///
/// `limit` is kept as a raw string so that an unparseable value falls back
/// to the default instead of rejecting the request outright.
#[derive(Debug, Deserialize, Default)]
pub struct HistoryQuery {
    pub limit: Option<String>,
    pub starting_after: Option<String>,
    pub ending_before: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// GET /history - One page of a user's chats, newest-first.
pub async fn get_history(
    State(state): State<AppState>,
    identity: OperatorIdentity,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<ChatPage>, AppError> {
    if query.starting_after.is_some() && query.ending_before.is_some() {
        return Err(AppError::Validation(
            "Only one of starting_after or ending_before can be provided".to_string(),
        ));
    }

    let limit = query
        .limit
        .as_deref()
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(DEFAULT_LIMIT);

    let target_user = match &query.user_id {
        Some(raw) => parse_uuid(raw)?,
        None => identity.user_id,
    };

    let cursor = match (&query.starting_after, &query.ending_before) {
        (Some(raw), None) => Some(HistoryCursor::StartingAfter(parse_uuid(raw)?)),
        (None, Some(raw)) => Some(HistoryCursor::EndingBefore(parse_uuid(raw)?)),
        _ => None,
    };

    let page = state.history.page(&target_user, limit, cursor).await?;

    Ok(Json(page))
}
