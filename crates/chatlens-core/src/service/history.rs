//! History pagination service.
//!
//! Pages a user's chats newest-first with cursor-by-position semantics: the
//! cursor names an existing chat, and the page contains rows strictly older
//! (`ending_before`) or strictly newer (`starting_after`) than that chat's
//! `(created_at, id)` position. The service fetches one row beyond the
//! requested limit to compute `has_more` without a second query.

use chatlens_types::chat::{ChatPage, HistoryCursor};
use chatlens_types::error::HistoryError;
use tracing::debug;
use uuid::Uuid;

use crate::repository::{ChatRepository, PageBoundary, PageDirection};

/// Pages chat history for one user at a time.
pub struct HistoryService<C: ChatRepository> {
    chats: C,
}

impl<C: ChatRepository> HistoryService<C> {
    /// Create a new history service over the given chat repository.
    pub fn new(chats: C) -> Self {
        Self { chats }
    }

    /// Fetch one page of `user_id`'s chats.
    ///
    /// `limit` must be at least 1. A cursor anchored at a chat id the store
    /// does not know is rejected as `UnknownCursor` -- the caller handed us
    /// a position that cannot be resolved.
    pub async fn page(
        &self,
        user_id: &Uuid,
        limit: i64,
        cursor: Option<HistoryCursor>,
    ) -> Result<ChatPage, HistoryError> {
        if limit < 1 {
            return Err(HistoryError::InvalidLimit(limit));
        }

        let boundary = match cursor {
            None => None,
            Some(cursor) => {
                let anchor_id = cursor.anchor();
                let anchor = self
                    .chats
                    .get_chat(&anchor_id)
                    .await?
                    .ok_or(HistoryError::UnknownCursor(anchor_id))?;
                let direction = match cursor {
                    HistoryCursor::EndingBefore(_) => PageDirection::Older,
                    HistoryCursor::StartingAfter(_) => PageDirection::Newer,
                };
                Some(PageBoundary {
                    created_at: anchor.created_at,
                    id: anchor.id,
                    direction,
                })
            }
        };

        // One extra row tells us whether a further page exists.
        let mut chats = self
            .chats
            .chats_page(user_id, limit + 1, boundary.as_ref())
            .await?;

        let has_more = chats.len() as i64 > limit;
        chats.truncate(limit as usize);

        debug!(%user_id, limit, has_more, returned = chats.len(), "history page served");

        Ok(ChatPage { chats, has_more })
    }
}
