//! Viewer session: current selection plus relevance-checked fetch completion.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;
use uuid::Uuid;

use super::cache::ResponseCache;
use super::selection::{Selection, SelectionError};

/// Outcome of a fetch, cached per selection.
///
/// Loading and error are flags layered onto the selection key, not separate
/// top-level states. There is no automatic retry; a failed entry stays
/// failed until the operator re-selects.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<V> {
    Loading,
    Loaded(V),
    Failed(String),
}

/// Proof of which selection initiated a fetch.
///
/// Handed out when a transition starts a fetch; redeemed on completion.
/// A ticket whose selection no longer matches the session's current
/// selection is stale and its response is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    selection: Selection,
}

impl FetchTicket {
    /// The selection this ticket was issued for.
    pub fn selection(&self) -> Selection {
        self.selection
    }
}

/// One operator's viewer state: selection, response cache, fetch-more guard.
pub struct ViewerSession<V> {
    current: RwLock<Selection>,
    cache: ResponseCache<Selection, FetchState<V>>,
    // Guards history fetch-more against duplicate page requests from
    // repeated scroll events.
    fetching_more: AtomicBool,
}

impl<V: Clone> ViewerSession<V> {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Selection::NoSelection),
            cache: ResponseCache::new(),
            fetching_more: AtomicBool::new(false),
        }
    }

    /// The current selection.
    pub fn selection(&self) -> Selection {
        *self.current.read().expect("selection lock poisoned")
    }

    /// Select a user, resetting any selected conversation, and begin a fetch
    /// keyed by the new selection.
    pub fn select_user(&self, user_id: Uuid) -> FetchTicket {
        let mut current = self.current.write().expect("selection lock poisoned");
        *current = current.select_user(user_id);
        self.cache.put(*current, FetchState::Loading);
        FetchTicket {
            selection: *current,
        }
    }

    /// Select a conversation under the current user and begin a fetch keyed
    /// by the new selection.
    pub fn select_conversation(&self, chat_id: Uuid) -> Result<FetchTicket, SelectionError> {
        let mut current = self.current.write().expect("selection lock poisoned");
        *current = current.select_conversation(chat_id)?;
        self.cache.put(*current, FetchState::Loading);
        Ok(FetchTicket {
            selection: *current,
        })
    }

    /// Complete a fetch with data.
    ///
    /// Returns `false` (and stores nothing) when the ticket's selection no
    /// longer matches the current one -- the response is stale.
    pub fn complete(&self, ticket: FetchTicket, value: V) -> bool {
        self.resolve(ticket, FetchState::Loaded(value))
    }

    /// Complete a fetch with an error, subject to the same relevance check.
    pub fn fail(&self, ticket: FetchTicket, error: impl Into<String>) -> bool {
        self.resolve(ticket, FetchState::Failed(error.into()))
    }

    fn resolve(&self, ticket: FetchTicket, state: FetchState<V>) -> bool {
        if ticket.selection != self.selection() {
            debug!(?ticket, "discarding stale fetch response");
            return false;
        }
        self.cache.put(ticket.selection, state);
        true
    }

    /// Cached fetch state for a selection, if any.
    pub fn cached(&self, selection: &Selection) -> Option<FetchState<V>> {
        self.cache.get(selection)
    }

    /// Try to start a history fetch-more. Returns `false` if one is already
    /// in flight.
    pub fn begin_fetch_more(&self) -> bool {
        self.fetching_more
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Mark the in-flight fetch-more as finished.
    pub fn finish_fetch_more(&self) {
        self.fetching_more.store(false, Ordering::Release);
    }
}

impl<V: Clone> Default for ViewerSession<V> {
    fn default() -> Self {
        Self::new()
    }
}
