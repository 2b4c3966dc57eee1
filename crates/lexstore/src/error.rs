//! Error types for lexstore and the crates built on it

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for dictionary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for store, cache and lookup operations
#[derive(Debug)]
pub enum Error {
    /// Cache constructed with a capacity below 1
    InvalidCapacity(i64),

    /// Value rejected by the cache because it is not a well-formed entry
    InvalidType(String),

    /// Cursor operation with no valid node to act on
    InvalidOperation(&'static str),

    /// Word missing from the cache, the store, or both
    NotFound(String),

    /// Backing file missing, unreadable or malformed
    SourceUnavailable {
        /// Path of the backing file
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// I/O error
    Io(io::Error),

    /// Parse error
    Parse(String),
}

impl Error {
    /// True for the recoverable "word not found" case
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", capacity)
            }
            Error::InvalidType(what) => write!(f, "Invalid type: {}", what),
            Error::InvalidOperation(what) => write!(f, "Invalid operation: {}", what),
            Error::NotFound(word) => write!(f, "Word not found: {}", word),
            Error::SourceUnavailable { path, reason } => {
                write!(f, "Source unavailable: {}: {}", path.display(), reason)
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Error::Parse(format!("{:?}", err))
    }
}
