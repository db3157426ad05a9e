//! Error Types
//!
//! Every failure of a generation run is one of four kinds. None of them
//! are retried; all of them end the current run and are handed back to
//! the caller untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a description or generating job scripts.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The description document does not exist.
    #[error("Description file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document exists but does not match the expected shape.
    #[error("Malformed description '{}': {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// A comparison names a group the description never declares.
    #[error("Group not found: '{0}'")]
    GroupNotFound(String),

    /// Reading, writing or creating a directory failed.
    #[error("I/O failure at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BatchError>;
