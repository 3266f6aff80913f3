//! MessageRepository trait definition.

use chatlens_types::error::RepositoryError;
use chatlens_types::message::{Message, MessagePart, MessageRole};
use chatlens_types::vote::Vote;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Raw row backing one digest entry: a user message's parts joined with the
/// owning chat's user id. The text extraction itself happens in
/// `DigestService`, not in the store.
#[derive(Debug, Clone)]
pub struct DigestRow {
    pub parts: Vec<MessagePart>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub role: MessageRole,
}

/// Read access to messages and their votes.
pub trait MessageRepository: Send + Sync {
    /// All messages of a chat in chronological (oldest-first) order.
    ///
    /// An unknown chat id yields an empty vector, not an error.
    fn messages_for_chat(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Message>, RepositoryError>> + Send;

    /// Votes cast on a chat's messages.
    fn votes_for_chat(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<Vote>, RepositoryError>> + Send;

    /// User-role messages joined with their chat's owner, newest-first.
    ///
    /// `chat_id = None` scans across all chats; `Some` scopes the query to
    /// one conversation server-side.
    fn user_message_rows(
        &self,
        chat_id: Option<&Uuid>,
    ) -> impl std::future::Future<Output = Result<Vec<DigestRow>, RepositoryError>> + Send;
}
