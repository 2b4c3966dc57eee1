//! # lexcache
//!
//! Bounded entry cache and cache-then-store lookup for LexiCache.
//!
//! ## Architecture
//! - **LinkedSequence**: singly-linked list, newest entry at the head
//! - **BoundedEntryCache**: fixed capacity, insertion-order (FIFO) eviction,
//!   linear search
//! - **LookupService**: cache first, then the `lexstore` store, writing store
//!   hits back into the cache

#![warn(missing_docs)]

mod cache;
mod list;
mod lookup;
mod stats;

pub use cache::{checked_capacity, BoundedEntryCache, CacheState, DEFAULT_CAPACITY};
pub use list::{CursorMut, Iter, LinkedSequence};
pub use lookup::{LookupService, Origin};
pub use stats::LookupStats;
