//! Viewer selection model backing the operator UI.
//!
//! The UI walks `NoSelection -> UserSelected -> ConversationSelected`;
//! each transition kicks off fetches whose responses may arrive after the
//! operator has already moved on. `ViewerSession` keys every fetch by the
//! selection that initiated it and discards responses whose key no longer
//! matches the current selection, so stale data can never overwrite a newer
//! view. Completed responses land in an explicit keyed cache with
//! last-write-wins semantics per key.

pub mod cache;
pub mod selection;
pub mod session;

pub use cache::ResponseCache;
pub use selection::{Selection, SelectionError};
pub use session::{FetchState, FetchTicket, ViewerSession};
