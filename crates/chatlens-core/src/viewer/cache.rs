//! Keyed response store with last-write-wins semantics per key.

use std::hash::Hash;

use dashmap::DashMap;

/// Concurrent keyed store for fetched responses.
///
/// Replaces ad hoc per-component state: every consumer reads and writes
/// through the same map, keyed by what was being fetched. Writes to the same
/// key overwrite unconditionally (last write wins); relevance filtering of
/// stale writes happens one level up, in `ViewerSession`.
pub struct ResponseCache<K: Eq + Hash, V> {
    entries: DashMap<K, V>,
}

impl<K: Eq + Hash, V> ResponseCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Store a value under a key, replacing any previous value.
    pub fn put(&self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Remove a key's value, returning it if present.
    pub fn invalidate(&self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|(_, v)| v)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> ResponseCache<K, V> {
    /// Clone out the value cached under a key, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }
}

impl<K: Eq + Hash, V> Default for ResponseCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let cache: ResponseCache<&str, u32> = ResponseCache::new();
        cache.put("k", 1);
        cache.put("k", 2);
        assert_eq!(cache.get(&"k"), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_invalidate() {
        let cache: ResponseCache<&str, u32> = ResponseCache::new();
        cache.put("k", 7);
        assert_eq!(cache.invalidate(&"k"), Some(7));
        assert_eq!(cache.get(&"k"), None);
        assert!(cache.is_empty());
    }
}
