//! Failed-parts digest handler.
//!
//! GET /messages?chat_id=
//!
//! Flattened, text-only projection of user messages for failure triage.
//! `chat_id` scopes the query to one conversation server-side; without it
//! the digest spans all chats (the legacy call shape).

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use chatlens_types::message::DigestEntry;

use crate::http::error::AppError;
use crate::http::handlers::parse_uuid;
use crate::state::AppState;

/// Query parameters for the digest.
#[derive(Debug, Deserialize, Default)]
pub struct DigestQuery {
    pub chat_id: Option<String>,
}

/// GET /messages - User-message digest, newest-first.
pub async fn get_digest(
    State(state): State<AppState>,
    Query(query): Query<DigestQuery>,
) -> Result<Json<Vec<DigestEntry>>, AppError> {
    let chat_id = query.chat_id.as_deref().map(parse_uuid).transpose()?;

    let digest = state.digest.user_message_digest(chat_id.as_ref()).await?;

    Ok(Json(digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::test_support::{seed_chat, seed_message, seed_user, test_state};
    use chrono::{Duration, Utc};
    use serde_json::json;

    #[tokio::test]
    async fn test_digest_extracts_first_text_and_fallback() {
        let state = test_state().await;
        let user = seed_user(&state, "a@example.com").await;
        let chat = seed_chat(&state, user, "chat", Utc::now()).await;
        let now = Utc::now();
        seed_message(
            &state,
            chat,
            "user",
            json!([
                {"type": "file", "url": "a.png"},
                {"type": "text", "text": "it broke"}
            ]),
            now,
        )
        .await;
        seed_message(
            &state,
            chat,
            "user",
            json!([{"type": "tool-call", "toolName": "search"}]),
            now - Duration::minutes(1),
        )
        .await;
        seed_message(
            &state,
            chat,
            "assistant",
            json!([{"type": "text", "text": "not in digest"}]),
            now,
        )
        .await;

        let Json(digest) = get_digest(State(state), Query(DigestQuery::default()))
            .await
            .unwrap();
        assert_eq!(digest.len(), 2);
        assert_eq!(digest[0].message, "it broke");
        assert_eq!(digest[1].message, "");
        assert_eq!(digest[0].user_id, user);
    }

    #[tokio::test]
    async fn test_digest_scoped_by_chat_id() {
        let state = test_state().await;
        let user = seed_user(&state, "b@example.com").await;
        let chat_a = seed_chat(&state, user, "a", Utc::now()).await;
        let chat_b = seed_chat(&state, user, "b", Utc::now()).await;
        seed_message(
            &state,
            chat_a,
            "user",
            json!([{"type": "text", "text": "from a"}]),
            Utc::now(),
        )
        .await;
        seed_message(
            &state,
            chat_b,
            "user",
            json!([{"type": "text", "text": "from b"}]),
            Utc::now(),
        )
        .await;

        let Json(scoped) = get_digest(
            State(state.clone()),
            Query(DigestQuery {
                chat_id: Some(chat_a.to_string()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].message, "from a");

        let Json(all) = get_digest(State(state), Query(DigestQuery::default()))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_chat_id_rejected() {
        let state = test_state().await;
        let err = get_digest(
            State(state),
            Query(DigestQuery {
                chat_id: Some("nope".to_string()),
            }),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
