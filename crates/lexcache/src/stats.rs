//! Lookup statistics tracking

use std::fmt;

/// Counters kept by a [`crate::LookupService`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LookupStats {
    cache_hits: u64,
    store_hits: u64,
    misses: u64,
    inserts: u64,
    evictions: u64,
}

impl LookupStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_cache_hit(&mut self) {
        self.cache_hits += 1;
    }

    pub(crate) fn record_store_hit(&mut self) {
        self.store_hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_insert(&mut self, evicted: bool) {
        self.inserts += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Lookups answered by the cache
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits
    }

    /// Lookups answered by the store after a cache miss
    pub fn store_hits(&self) -> u64 {
        self.store_hits
    }

    /// Lookups found in neither cache nor store
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Entries written into the cache
    pub fn inserts(&self) -> u64 {
        self.inserts
    }

    /// Entries dropped from the cache to make room
    pub fn evictions(&self) -> u64 {
        self.evictions
    }

    /// Total lookups
    pub fn lookups(&self) -> u64 {
        self.cache_hits + self.store_hits + self.misses
    }

    /// Fraction of lookups served from the cache (0.0 to 1.0)
    pub fn hit_ratio(&self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for LookupStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "lookups:    {}", self.lookups())?;
        writeln!(f, "cache_hits: {}", self.cache_hits)?;
        writeln!(f, "store_hits: {}", self.store_hits)?;
        writeln!(f, "misses:     {}", self.misses)?;
        writeln!(f, "inserts:    {}", self.inserts)?;
        writeln!(f, "evictions:  {}", self.evictions)?;
        write!(f, "hit_ratio:  {:.2}", self.hit_ratio())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let mut stats = LookupStats::new();

        stats.record_cache_hit();
        stats.record_cache_hit();
        stats.record_store_hit();
        stats.record_miss();
        stats.record_insert(false);
        stats.record_insert(true);

        assert_eq!(stats.lookups(), 4);
        assert_eq!(stats.inserts(), 2);
        assert_eq!(stats.evictions(), 1);
        assert_eq!(stats.hit_ratio(), 0.5);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = LookupStats::new();

        stats.record_cache_hit();
        stats.record_miss();
        stats.reset();

        assert_eq!(stats, LookupStats::default());
        assert_eq!(stats.hit_ratio(), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let mut stats = LookupStats::new();
        stats.record_cache_hit();

        let text = stats.to_string();
        assert!(text.contains("cache_hits: 1"));
        assert!(text.ends_with("hit_ratio:  1.00"));
    }
}
