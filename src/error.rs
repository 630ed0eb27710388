//! Error types and result aliases for codefmt.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used by the binary and config loading
//! - [`DocBlockError`]: Failures raised while normalizing a documentation block
//! - [`FatalError`]: A per-file failure that aborts the whole run

use std::path::PathBuf;

use anyhow::Result as AnyhowResult;
use thiserror::Error;

pub type Result<T> = AnyhowResult<T>;

/// Problems found inside (or instead of) a file's documentation block
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocBlockError {
    /// No `/* ... */` span with at least one interior line exists
    #[error("documentation block not found")]
    MissingBlock,

    /// A key that is neither an alias nor a canonical key
    #[error("unrecognized key `{key}` in documentation block")]
    UnknownKey { key: String },

    /// The value of a `Date` line could not be read as a calendar date
    #[error("unparseable date `{value}` in documentation block")]
    BadDate { value: String },
}

/// Reason a file could not be processed
#[derive(Debug, Error)]
pub enum FatalCause {
    #[error(transparent)]
    DocBlock(#[from] DocBlockError),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("file has no content")]
    Empty,
}

/// A fatal condition tied to the file that produced it
///
/// The run stops at the first one of these; files already persisted stay modified.
#[derive(Debug, Error)]
#[error("{}: {cause}", .path.display())]
pub struct FatalError {
    pub path: PathBuf,
    #[source]
    pub cause: FatalCause,
}

impl FatalError {
    pub fn new(path: impl Into<PathBuf>, cause: impl Into<FatalCause>) -> Self {
        Self {
            path: path.into(),
            cause: cause.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_error_message_names_file_and_key() {
        let err = FatalError::new(
            "src/a.cs",
            DocBlockError::UnknownKey {
                key: "Unknown".to_string(),
            },
        );
        let msg = err.to_string();
        assert!(msg.starts_with("src/a.cs: "));
        assert!(msg.contains("`Unknown`"));
    }

    #[test]
    fn test_io_cause_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FatalError::new("x.cs", io);
        assert!(matches!(err.cause, FatalCause::Io(_)));
    }
}
