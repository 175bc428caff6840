//! Error types for metareader core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced while parsing a vBucket filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// The filter expression was empty.
    #[error("filter expression is empty")]
    Empty,

    /// A token is neither an identifier nor an ascending range.
    #[error("invalid filter token '{token}': {reason}")]
    InvalidToken {
        /// The offending token text.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },
}

impl FilterError {
    /// Create an invalid token error.
    pub fn invalid_token(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that terminate a run.
///
/// Per-file problems are not errors; they are reported as
/// [`crate::Outcome`]s so the rest of the batch still runs.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The root path does not exist.
    #[error("path not found: {}", .path.display())]
    PathNotFound {
        /// The supplied path.
        path: PathBuf,
    },

    /// The root path exists but is not a directory.
    #[error("must provide data directory and not file: {}", .path.display())]
    NotADirectory {
        /// The supplied path.
        path: PathBuf,
    },

    /// The filter expression could not be parsed.
    #[error("{0}")]
    Filter(#[from] FilterError),

    /// I/O error outside of per-file reads (listing, writing output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The structured document could not be serialized.
    #[error("could not serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}
