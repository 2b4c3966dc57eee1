//! # lexstore
//!
//! File-backed dictionary store for LexiCache.
//!
//! ## Overview
//! - [`Entry`]: immutable dictionary definition keyed by its word
//! - [`DictionaryStore`]: word index loaded once from a JSON or TOON file
//! - [`Error`]: error taxonomy shared by the cache and lookup layers

#![warn(missing_docs)]

mod entry;
mod error;
pub mod parser;
mod store;

pub use entry::Entry;
pub use error::{Error, Result};
pub use store::{DictionaryStore, StoreFormat, DEFAULT_STORE_FILE};
