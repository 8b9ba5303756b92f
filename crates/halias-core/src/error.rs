//! Error types for halias-core.

use std::path::{Path, PathBuf};

/// Result type alias for Halias operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading settings, reading notes, or
/// rewriting frontmatter.
///
/// None of these represent the "nothing to do" paths of the alias command
/// (no active note, no headings); those are `CommandOutcome::Skipped`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without path context
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file
    #[error("I/O error on {}: {source}", path.display())]
    IoWithPath {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content could not be parsed (frontmatter, settings values)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A settings change was rejected
    #[error("Validation error: {message}")]
    Validation {
        /// Setting that failed validation
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// A referenced note or setting does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Creates an I/O error carrying the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a new parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse(message.into())
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<S: Into<String>>(what: S) -> Self {
        Error::NotFound(what.into())
    }
}
