//! Failed-parts digest: the flattened, text-only projection of user messages.
//!
//! The digest is a lossy, best-effort summary used for failure triage: for
//! each user-role message it keeps only the first text segment of the parts
//! sequence (or the empty string when none exists) alongside the owning
//! user's id, the timestamp, and the role.

use chatlens_types::error::RepositoryError;
use chatlens_types::message::{DigestEntry, MessagePart};
use uuid::Uuid;

use crate::repository::MessageRepository;

/// Builds the user-message digest, optionally scoped to one chat.
pub struct DigestService<M: MessageRepository> {
    messages: M,
}

/// First text segment of a parts sequence, or the empty string.
///
/// Non-text segments are silently dropped; a message whose parts hold only
/// attachments or tool calls digests to "".
pub fn first_text(parts: &[MessagePart]) -> String {
    parts
        .iter()
        .find_map(MessagePart::as_text)
        .unwrap_or_default()
        .to_string()
}

impl<M: MessageRepository> DigestService<M> {
    /// Create a new digest service over the given message repository.
    pub fn new(messages: M) -> Self {
        Self { messages }
    }

    /// Digest of user-role messages, newest-first.
    ///
    /// `chat_id = None` spans all chats; `Some` scopes the underlying query
    /// to a single conversation. The projection is deterministic: the same
    /// store state always yields the same output.
    pub async fn user_message_digest(
        &self,
        chat_id: Option<&Uuid>,
    ) -> Result<Vec<DigestEntry>, RepositoryError> {
        let rows = self.messages.user_message_rows(chat_id).await?;

        Ok(rows
            .into_iter()
            .map(|row| DigestEntry {
                message: first_text(&row.parts),
                user_id: row.user_id,
                created_at: row.created_at,
                role: row.role,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::DigestRow;
    use chatlens_types::message::{Message, MessageRole};
    use chatlens_types::vote::Vote;
    use chrono::Utc;
    use serde_json::json;

    #[test]
    fn test_first_text_picks_first_text_segment() {
        let parts = vec![
            MessagePart::Other(json!({"type": "file", "url": "a.png"})),
            MessagePart::Text {
                text: "the actual question".to_string(),
            },
            MessagePart::Text {
                text: "a later segment".to_string(),
            },
        ];
        assert_eq!(first_text(&parts), "the actual question");
    }

    #[test]
    fn test_first_text_empty_when_no_text() {
        let parts = vec![MessagePart::Other(json!({"type": "tool-call"}))];
        assert_eq!(first_text(&parts), "");
        assert_eq!(first_text(&[]), "");
    }

    struct FakeMessages {
        rows: Vec<(Option<Uuid>, DigestRow)>,
    }

    impl MessageRepository for FakeMessages {
        async fn messages_for_chat(
            &self,
            _chat_id: &Uuid,
        ) -> Result<Vec<Message>, RepositoryError> {
            Ok(vec![])
        }

        async fn votes_for_chat(&self, _chat_id: &Uuid) -> Result<Vec<Vote>, RepositoryError> {
            Ok(vec![])
        }

        async fn user_message_rows(
            &self,
            chat_id: Option<&Uuid>,
        ) -> Result<Vec<DigestRow>, RepositoryError> {
            Ok(self
                .rows
                .iter()
                .filter(|(owner, _)| match chat_id {
                    None => true,
                    Some(id) => owner.as_ref() == Some(id),
                })
                .map(|(_, row)| row.clone())
                .collect())
        }
    }

    fn row(chat: Uuid, text: Option<&str>) -> (Option<Uuid>, DigestRow) {
        let parts = match text {
            Some(t) => vec![MessagePart::Text {
                text: t.to_string(),
            }],
            None => vec![MessagePart::Other(json!({"type": "file"}))],
        };
        (
            Some(chat),
            DigestRow {
                parts,
                user_id: Uuid::now_v7(),
                created_at: Utc::now(),
                role: MessageRole::User,
            },
        )
    }

    #[tokio::test]
    async fn test_digest_projects_text_and_fallback() {
        let chat = Uuid::now_v7();
        let svc = DigestService::new(FakeMessages {
            rows: vec![row(chat, Some("it broke")), row(chat, None)],
        });

        let digest = svc.user_message_digest(None).await.unwrap();
        assert_eq!(digest.len(), 2);
        assert_eq!(digest[0].message, "it broke");
        assert_eq!(digest[1].message, "");
        assert_eq!(digest[0].role, MessageRole::User);
    }

    #[tokio::test]
    async fn test_digest_scoped_to_chat() {
        let chat_a = Uuid::now_v7();
        let chat_b = Uuid::now_v7();
        let svc = DigestService::new(FakeMessages {
            rows: vec![row(chat_a, Some("from a")), row(chat_b, Some("from b"))],
        });

        let scoped = svc.user_message_digest(Some(&chat_a)).await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].message, "from a");

        let all = svc.user_message_digest(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_digest_idempotent_over_unchanged_rows() {
        let chat = Uuid::now_v7();
        let svc = DigestService::new(FakeMessages {
            rows: vec![row(chat, Some("same")), row(chat, None)],
        });

        let first = svc.user_message_digest(None).await.unwrap();
        let second = svc.user_message_digest(None).await.unwrap();
        assert_eq!(first, second);
    }
}
