//! File-backed dictionary store
//!
//! Supported layouts, picked by file extension:
//! - `*.toon`: TOON table (see [`crate::parser`])
//! - anything else: JSON document `{"entries": [ ... ]}`

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use ahash::RandomState;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::entry::Entry;
use crate::error::{Error, Result};
use crate::parser::parse_entries;

/// Default store file name
pub const DEFAULT_STORE_FILE: &str = "dictionary.json";

/// On-disk store format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    /// `{"entries": [...]}` document
    Json,
    /// TOON table
    Toon,
}

impl StoreFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toon") => StoreFormat::Toon,
            _ => StoreFormat::Json,
        }
    }
}

#[derive(Deserialize)]
struct JsonDocument {
    entries: Vec<serde_json::Value>,
}

/// In-memory word index loaded once from a backing file
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    path: Option<PathBuf>,
    entries: HashMap<String, Entry, RandomState>,
    skipped: usize,
}

impl DictionaryStore {
    /// Load every entry from the file at `path`
    ///
    /// Any failure to read or decode the file is reported as
    /// [`Error::SourceUnavailable`]. Records that are not well-formed entries
    /// are skipped; a later record for the same word replaces an earlier one.
    ///
    /// # Arguments
    /// * `path` - Dictionary file; `*.toon` is read as TOON, anything else as JSON
    ///
    /// # Returns
    /// * `Result<DictionaryStore>` - Loaded word index
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |err: Error| Error::SourceUnavailable {
            path: path.to_path_buf(),
            reason: match err {
                Error::Io(e) => e.to_string(),
                Error::Parse(msg) => msg,
                other => other.to_string(),
            },
        };

        let content = fs::read_to_string(path).map_err(|e| unavailable(e.into()))?;
        let format = StoreFormat::from_path(path);
        let (records, mut skipped) = Self::decode(&content, format).map_err(unavailable)?;

        let mut store = Self::from_entries(records);
        skipped += store.skipped;
        store.skipped = skipped;
        store.path = Some(path.to_path_buf());

        if skipped > 0 {
            warn!("Skipped {} malformed records in {}", skipped, path.display());
        }
        debug!(
            "Loaded {} entries from {} ({:?})",
            store.len(),
            path.display(),
            format
        );

        Ok(store)
    }

    /// Decode file content into entries, counting records that fail to decode
    fn decode(content: &str, format: StoreFormat) -> Result<(Vec<Entry>, usize)> {
        match format {
            StoreFormat::Toon => Ok((parse_entries(content)?, 0)),
            StoreFormat::Json => {
                let document: JsonDocument = serde_json::from_str(content)?;
                let total = document.entries.len();
                let entries: Vec<Entry> = document
                    .entries
                    .into_iter()
                    .filter_map(|record| serde_json::from_value(record).ok())
                    .collect();
                let skipped = total - entries.len();
                Ok((entries, skipped))
            }
        }
    }

    /// Build a store from entries already in memory
    ///
    /// Ill-formed entries are skipped and counted.
    pub fn from_entries<I: IntoIterator<Item = Entry>>(entries: I) -> Self {
        let mut store = Self::default();
        for entry in entries {
            if entry.is_well_formed() {
                store.entries.insert(entry.word().to_string(), entry);
            } else {
                store.skipped += 1;
            }
        }
        store
    }

    /// Look up a word
    pub fn search(&self, word: &str) -> Result<Entry> {
        self.entries
            .get(word)
            .cloned()
            .ok_or_else(|| Error::NotFound(word.to_string()))
    }

    /// Check whether a word is present
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of loaded entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of records dropped while loading
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Backing file, if the store was loaded from disk
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All words, sorted
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}
