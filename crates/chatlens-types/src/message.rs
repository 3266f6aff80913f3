//! Message types: one turn within a chat, composed of ordered typed parts.
//!
//! `parts` is a heterogeneous ordered sequence. Only `text` segments are
//! meaningful to the failed-parts digest; every other shape (attachments,
//! tool calls, ...) round-trips opaquely through `MessagePart::Other`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Who authored a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (role IN ('user', 'assistant'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A typed segment of a message body.
///
/// The tag lives in the `type` field of the JSON object. Unknown types fall
/// through to `Other`, preserving the original value byte-for-byte on
/// re-serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MessagePart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(untagged)]
    Other(serde_json::Value),
}

impl MessagePart {
    /// The text payload, if this is a text segment.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MessagePart::Text { text } => Some(text),
            MessagePart::Other(_) => None,
        }
    }
}

/// One turn within a chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub role: MessageRole,
    pub parts: Vec<MessagePart>,
    pub created_at: DateTime<Utc>,
}

/// Flattened, text-only projection of a user message, used for failure triage.
///
/// `message` holds the first text segment of the source message's parts, or
/// the empty string when no text segment exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DigestEntry {
    pub message: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub role: MessageRole,
}
