//! Bounded entry cache with insertion-order eviction
//!
//! Entries are kept newest first. Once the cache is full, each `add` drops
//! the oldest entry (the tail). Lookups are a linear scan and never reorder
//! entries, so eviction follows insertion order, not access order.

use lexstore::{Entry, Error, Result};
use tracing::debug;

use crate::list::LinkedSequence;

/// Default number of entries held by the cache
pub const DEFAULT_CAPACITY: usize = 10;

/// Fill state of a [`BoundedEntryCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Fewer entries than the capacity
    NotFull,
    /// At capacity; further adds evict
    Full,
}

/// Convert a signed, user-supplied capacity into a cache capacity
pub fn checked_capacity(capacity: i64) -> Result<usize> {
    if capacity < 1 {
        return Err(Error::InvalidCapacity(capacity));
    }
    usize::try_from(capacity).map_err(|_| Error::InvalidCapacity(capacity))
}

/// Fixed-capacity FIFO cache of dictionary entries
pub struct BoundedEntryCache {
    entries: LinkedSequence,
    capacity: usize,
    size: usize,
}

impl BoundedEntryCache {
    /// Create an empty cache holding at most `capacity` entries
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of cached entries
    ///
    /// # Returns
    /// * `Result<BoundedEntryCache>` - Empty cache in the `NotFull` state
    ///
    /// # Errors
    /// * [`Error::InvalidCapacity`] if `capacity` is 0
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(0));
        }

        Ok(Self {
            entries: LinkedSequence::new(),
            capacity,
            size: 0,
        })
    }

    /// Add an entry as the newest item
    ///
    /// When the cache is full the oldest entry is evicted and returned.
    ///
    /// # Errors
    /// * [`Error::InvalidType`] if the entry is not well-formed; the cache is
    ///   left untouched
    pub fn add(&mut self, entry: Entry) -> Result<Option<Entry>> {
        if let Err(field) = entry.check() {
            return Err(Error::InvalidType(format!(
                "entry has a blank {} field",
                field
            )));
        }

        if self.size < self.capacity {
            self.size += 1;
            self.entries.add_to_head(entry);
            return Ok(None);
        }

        let evicted = self.evict_tail()?;
        debug!("Evicted '{}' to admit '{}'", evicted.word(), entry.word());
        self.entries.add_to_head(entry);
        Ok(Some(evicted))
    }

    /// Drop the oldest entry, walking a cursor to the node before the tail
    fn evict_tail(&mut self) -> Result<Entry> {
        if self.size == 1 {
            return self
                .entries
                .pop_head()
                .ok_or(Error::InvalidOperation("cache size out of sync with list"));
        }

        let mut cursor = self.entries.cursor_mut();
        for _ in 0..self.size - 2 {
            cursor.advance();
        }
        cursor.remove_after()
    }

    /// Find the entry for `word`
    ///
    /// # Errors
    /// * [`Error::NotFound`] if no cached entry has that word
    pub fn search(&self, word: &str) -> Result<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.word() == word)
            .ok_or_else(|| Error::NotFound(word.to_string()))
    }

    /// Check whether `word` is cached
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_ok()
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current fill state
    pub fn state(&self) -> CacheState {
        if self.size == self.capacity {
            CacheState::Full
        } else {
            CacheState::NotFull
        }
    }

    /// Check if further adds will evict
    pub fn is_full(&self) -> bool {
        self.state() == CacheState::Full
    }

    /// Cached entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter()
    }

    /// Cached words, newest first
    pub fn words(&self) -> Vec<&str> {
        self.iter().map(Entry::word).collect()
    }

    /// Drop every cached entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.size = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> Entry {
        Entry::new(word, "noun", format!("Definition of {}.", word), None)
    }

    fn filled(capacity: usize, words: &[&str]) -> BoundedEntryCache {
        let mut cache = BoundedEntryCache::new(capacity).unwrap();
        for word in words {
            cache.add(entry(word)).unwrap();
        }
        cache
    }

    #[test]
    fn test_invalid_capacity() {
        assert!(matches!(
            BoundedEntryCache::new(0),
            Err(Error::InvalidCapacity(0))
        ));
        assert!(matches!(checked_capacity(0), Err(Error::InvalidCapacity(0))));
        assert!(matches!(checked_capacity(-3), Err(Error::InvalidCapacity(-3))));
        assert_eq!(checked_capacity(4).unwrap(), 4);
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        for capacity in 1..=6 {
            let mut cache = BoundedEntryCache::new(capacity).unwrap();
            for n in 1..=15 {
                cache.add(entry(&format!("w{}", n))).unwrap();
                assert_eq!(cache.len(), n.min(capacity));
                assert_eq!(cache.iter().count(), cache.len());
            }
        }
    }

    #[test]
    fn test_state_transitions() {
        let mut cache = BoundedEntryCache::new(2).unwrap();
        assert!(cache.is_empty());
        assert_eq!(cache.state(), CacheState::NotFull);

        cache.add(entry("a")).unwrap();
        assert_eq!(cache.state(), CacheState::NotFull);

        cache.add(entry("b")).unwrap();
        assert_eq!(cache.state(), CacheState::Full);

        cache.add(entry("c")).unwrap();
        assert!(cache.is_full());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_fifo_eviction() {
        let mut cache = filled(3, &["e1", "e2", "e3"]);

        let evicted = cache.add(entry("e4")).unwrap();

        assert_eq!(evicted.map(|e| e.word().to_string()), Some("e1".to_string()));
        assert!(matches!(cache.search("e1"), Err(Error::NotFound(w)) if w == "e1"));
        for word in ["e2", "e3", "e4"] {
            assert_eq!(cache.search(word).unwrap().word(), word);
        }
        assert_eq!(cache.words(), vec!["e4", "e3", "e2"]);
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = filled(1, &["a"]);

        let evicted = cache.add(entry("b")).unwrap();

        assert_eq!(evicted.unwrap().word(), "a");
        assert_eq!(cache.words(), vec!["b"]);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_hit_does_not_change_eviction_order() {
        let mut cache = filled(3, &["a", "b", "c"]);

        // Hit the oldest entry; it must still be the next to go
        cache.search("a").unwrap();
        cache.add(entry("d")).unwrap();
        assert!(!cache.contains("a"));

        cache.search("b").unwrap();
        cache.add(entry("e")).unwrap();
        cache.add(entry("f")).unwrap();
        assert_eq!(cache.words(), vec!["f", "e", "d"]);
    }

    #[test]
    fn test_search_is_idempotent() {
        let cache = filled(3, &["a", "b"]);

        let first = cache.search("a").unwrap().clone();
        let second = cache.search("a").unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.words(), vec!["b", "a"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let cache = filled(2, &["Apple"]);
        assert!(cache.search("apple").is_err());
        assert!(cache.search("Apple").is_ok());
    }

    #[test]
    fn test_add_malformed_entry() {
        let mut cache = filled(2, &["a", "b"]);

        let result = cache.add(Entry::new("", "noun", "Nothing.", None));
        assert!(matches!(result, Err(Error::InvalidType(_))));

        let result = cache.add(Entry::new("c", "noun", " ", None));
        assert!(matches!(result, Err(Error::InvalidType(_))));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.words(), vec!["b", "a"]);
    }

    #[test]
    fn test_clear() {
        let mut cache = filled(2, &["a", "b"]);
        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.words().is_empty());

        cache.add(entry("c")).unwrap();
        assert_eq!(cache.len(), 1);
    }
}
