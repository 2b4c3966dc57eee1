//! LookupService: bounded cache in front of a DictionaryStore

use std::fmt;
use std::path::Path;

use lexstore::{DictionaryStore, Entry, Error, Result};
use tracing::debug;

use crate::cache::BoundedEntryCache;
use crate::stats::LookupStats;

/// Where a lookup was answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Served by the in-memory cache
    Cache,
    /// Served by the backing store
    Store,
}

impl Origin {
    /// Short upper-case label
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Cache => "CACHE",
            Origin::Store => "LOCAL",
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Found in {}", self.label())
    }
}

/// Cache-then-store word lookup with write-through population
pub struct LookupService {
    /// Source of truth for all entries
    store: DictionaryStore,

    /// Recently resolved entries
    cache: BoundedEntryCache,

    /// Lookup statistics
    stats: LookupStats,
}

impl LookupService {
    /// Combine an already loaded store and cache
    pub fn new(store: DictionaryStore, cache: BoundedEntryCache) -> Self {
        Self {
            store,
            cache,
            stats: LookupStats::new(),
        }
    }

    /// Load the store at `path` and put a cache of `capacity` entries in front
    ///
    /// # Arguments
    /// * `path` - Dictionary file (`.json` or `.toon`)
    /// * `capacity` - Maximum number of cached entries
    ///
    /// # Returns
    /// * `Result<LookupService>` - Service with a loaded store and an empty cache
    ///
    /// # Errors
    /// * [`Error::InvalidCapacity`] if `capacity` is 0
    /// * [`Error::SourceUnavailable`] if the store cannot be loaded
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self> {
        let cache = BoundedEntryCache::new(capacity)?;
        let store = DictionaryStore::open(path)?;
        Ok(Self::new(store, cache))
    }

    /// Resolve `word`, trying the cache before the store
    ///
    /// A store hit is added to the cache, which may evict its oldest entry.
    ///
    /// # Errors
    /// * [`Error::NotFound`] carrying `word` if neither layer has it
    pub fn search(&mut self, word: &str) -> Result<(Entry, Origin)> {
        match self.cache.search(word) {
            Ok(entry) => {
                self.stats.record_cache_hit();
                debug!("'{}' served from cache", word);
                return Ok((entry.clone(), Origin::Cache));
            }
            Err(Error::NotFound(_)) => {}
            Err(e) => return Err(e),
        }

        let entry = match self.store.search(word) {
            Ok(entry) => entry,
            Err(Error::NotFound(_)) => {
                self.stats.record_miss();
                debug!("'{}' not found", word);
                return Err(Error::NotFound(word.to_string()));
            }
            Err(e) => return Err(e),
        };

        let evicted = self.cache.add(entry.clone())?;
        self.stats.record_store_hit();
        self.stats.record_insert(evicted.is_some());
        debug!("'{}' served from store", word);

        Ok((entry, Origin::Store))
    }

    /// Get lookup statistics
    pub fn stats(&self) -> &LookupStats {
        &self.stats
    }

    /// Get the cache
    pub fn cache(&self) -> &BoundedEntryCache {
        &self.cache
    }

    /// Get the backing store
    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Clear the cache and statistics (store remains unchanged)
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }
}
