//! Error types for the cologne library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the catalog loader, the ratings store, the request
/// logger and the session context.
///
/// Lookups of unknown fragrances are deliberately absent here: an unknown
/// name is a normal outcome, not a failure.
#[derive(Error, Debug)]
pub enum Error {
    /// File system error, with the path that was being accessed
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON document could not be parsed
    #[error("JSON error in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Two catalog entries share a name
    #[error("Duplicate catalog entry: '{0}'")]
    DuplicateEntry(String),

    /// Ratings document is valid JSON but not an object
    #[error("Ratings file '{}' must contain a JSON object", .0.display())]
    RatingsShape(PathBuf),

    /// Submission attempted with no saved hybrids
    #[error("No saved hybrids to submit")]
    NothingSaved,
}

impl Error {
    /// Creates an IO error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON error bound to a path
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
