use std::num::NonZeroUsize;

use lru::LruCache;

/// Bounded memoization cache keyed by the exact input string.
///
/// A fixed-capacity LRU: repeated lookups with identical input return the
/// stored value and refresh its recency; inserting past capacity evicts the
/// least recently used entry. Constructed by the caller and handed to the
/// pipeline so tests control capacity and lifetime.
#[derive(Debug)]
pub(crate) struct MemoCache<V> {
    inner: LruCache<String, V>,
}

impl<V: Clone> MemoCache<V> {
    pub(crate) fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner: LruCache::new(capacity),
        }
    }

    pub(crate) fn get(&mut self, key: &str) -> Option<V> {
        self.inner.get(key).cloned()
    }

    pub(crate) fn put(&mut self, key: String, value: V) {
        self.inner.put(key, value);
    }

    pub(crate) fn clear(&mut self) {
        self.inner.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.len()
    }
}
