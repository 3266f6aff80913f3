//! Chat thread types and the history pagination contract.
//!
//! A `Chat` is a conversation thread owned by one user. History pages are
//! ordered newest-first by `(created_at, id)`; ids are UUIDv7 and therefore
//! time-sortable, which makes the compound key a total order even when two
//! chats share a timestamp.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A conversation thread owned by a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// One page of a user's chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatPage {
    pub chats: Vec<Chat>,
    /// True iff strictly more rows exist beyond this page in the
    /// requested direction.
    pub has_more: bool,
}

/// Cursor into a user's chat history, anchored at an existing chat id.
///
/// `EndingBefore` requests chats strictly older than the anchor's position,
/// `StartingAfter` strictly newer. Supplying both directions is a caller
/// error rejected before the cursor is ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCursor {
    EndingBefore(Uuid),
    StartingAfter(Uuid),
}

impl HistoryCursor {
    /// The chat id anchoring this cursor.
    pub fn anchor(&self) -> Uuid {
        match self {
            HistoryCursor::EndingBefore(id) | HistoryCursor::StartingAfter(id) => *id,
        }
    }
}
