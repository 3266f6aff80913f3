//! Vote type: operator-visible feedback on assistant messages.
//!
//! Read-only in this viewer; votes are cast elsewhere.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A thumbs-up/down cast on a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub message_id: Uuid,
    pub is_upvoted: bool,
}
