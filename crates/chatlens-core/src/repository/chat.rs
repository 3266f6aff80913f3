//! ChatRepository trait definition.
//!
//! Chats are read and paginated by `(created_at, id)` descending. The only
//! write this viewer performs is an explicit delete, which the store cascades
//! to the chat's messages and their votes.

use chatlens_types::chat::Chat;
use chatlens_types::error::RepositoryError;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Which side of a boundary a page request wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    /// Rows strictly older than the boundary (`ending_before`).
    Older,
    /// Rows strictly newer than the boundary (`starting_after`).
    Newer,
}

/// Resolved pagination boundary: the compound sort key of an anchor chat.
///
/// Comparisons against the boundary use `(created_at, id)` so that chats
/// sharing a timestamp still page deterministically.
#[derive(Debug, Clone, Copy)]
pub struct PageBoundary {
    pub created_at: DateTime<Utc>,
    pub id: Uuid,
    pub direction: PageDirection,
}

/// Read (plus delete) access to chat threads.
pub trait ChatRepository: Send + Sync {
    /// Look up a single chat by id.
    fn get_chat(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<Chat>, RepositoryError>> + Send;

    /// A user's chats ordered by `(created_at, id)` DESC, at most `limit` rows.
    fn chats_for_user(
        &self,
        user_id: &Uuid,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<Chat>, RepositoryError>> + Send;

    /// A page of a user's chats relative to an optional boundary.
    ///
    /// Always ordered `(created_at, id)` DESC regardless of direction; the
    /// boundary only restricts which side of the anchor is visible. Returns
    /// at most `limit` rows -- the caller passes one more than it needs to
    /// detect a further page.
    fn chats_page(
        &self,
        user_id: &Uuid,
        limit: i64,
        boundary: Option<&PageBoundary>,
    ) -> impl std::future::Future<Output = Result<Vec<Chat>, RepositoryError>> + Send;

    /// Delete a chat and (via cascade) its messages and votes.
    ///
    /// Returns `RepositoryError::NotFound` if no such chat exists.
    fn delete_chat(
        &self,
        chat_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
