//! Read services built on the repository traits.

pub mod conversation;
pub mod digest;
pub mod history;

pub use conversation::ConversationService;
pub use digest::DigestService;
pub use history::HistoryService;
