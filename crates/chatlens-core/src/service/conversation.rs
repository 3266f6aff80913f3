//! Conversation fetch service: chats per user, messages and votes per chat.
//!
//! All reads treat unknown ids as empty sequences -- callers must handle
//! empty as a valid terminal state, not a failure signal. The one write is
//! an explicit chat delete.

use chatlens_types::chat::Chat;
use chatlens_types::error::RepositoryError;
use chatlens_types::message::Message;
use chatlens_types::vote::Vote;
use tracing::info;
use uuid::Uuid;

use crate::repository::{ChatRepository, MessageRepository};

/// Cap on the unpaginated per-user chat listing.
pub const MAX_UNPAGINATED_CHATS: i64 = 100;

/// Serves the per-user and per-chat read paths of the viewer.
pub struct ConversationService<C: ChatRepository, M: MessageRepository> {
    chats: C,
    messages: M,
}

impl<C: ChatRepository, M: MessageRepository> ConversationService<C, M> {
    /// Create a new conversation service with the given repositories.
    pub fn new(chats: C, messages: M) -> Self {
        Self { chats, messages }
    }

    /// A user's chats, newest-first, capped at `MAX_UNPAGINATED_CHATS`.
    pub async fn chats_for_user(&self, user_id: &Uuid) -> Result<Vec<Chat>, RepositoryError> {
        self.chats
            .chats_for_user(user_id, MAX_UNPAGINATED_CHATS)
            .await
    }

    /// A chat's messages in chronological reading order.
    pub async fn messages_for_chat(&self, chat_id: &Uuid) -> Result<Vec<Message>, RepositoryError> {
        self.messages.messages_for_chat(chat_id).await
    }

    /// Votes cast on a chat's messages.
    pub async fn votes_for_chat(&self, chat_id: &Uuid) -> Result<Vec<Vote>, RepositoryError> {
        self.messages.votes_for_chat(chat_id).await
    }

    /// Delete a chat; the store cascades to messages and votes.
    pub async fn delete_chat(&self, chat_id: &Uuid) -> Result<(), RepositoryError> {
        self.chats.delete_chat(chat_id).await?;
        info!(%chat_id, "chat deleted");
        Ok(())
    }
}
