//! Error types for the validation library.
//!
//! Only failures that prevent a [`crate::ValidationResult`] from being
//! produced at all live here. Deficiencies inside a well-formed document are
//! reported as [`crate::Issue`] records instead.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before (or instead of) running the validation engine.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// Input could not be parsed as JSON
    #[error("Failed to parse plan document: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The document is absent or its root is not a JSON object
    #[error("Invalid plan document: {reason}")]
    InvalidDocument { reason: String },
    /// A schema reference was supplied but could not be interpreted
    #[error("Invalid schema reference: {message}")]
    Schema { message: String },
    /// One of the engine's text patterns failed to compile
    #[error("Failed to compile pattern '{name}': {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Builder for creating file system errors with path context.
pub struct FileSystemErrorBuilder {
    path: PathBuf,
}

impl FileSystemErrorBuilder {
    /// Create a new file system error builder for a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: std::io::Error) -> ValidatorError {
        ValidatorError::FileSystem {
            path: self.path,
            source,
        }
    }
}

impl ValidatorError {
    /// Creates a builder for file system errors.
    pub fn file_system(path: impl Into<PathBuf>) -> FileSystemErrorBuilder {
        FileSystemErrorBuilder::new(path)
    }

    /// Creates an invalid document error.
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid schema reference error.
    pub fn schema(message: impl fmt::Display) -> Self {
        Self::Schema {
            message: message.to_string(),
        }
    }
}

/// Extension trait for attaching a path to I/O results.
pub trait IoResultExt<T> {
    /// Map I/O errors to [`ValidatorError::FileSystem`] for `path`.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| ValidatorError::file_system(path).with_source(e))
    }
}

/// Result type alias for validator operations
pub type Result<T> = std::result::Result<T, ValidatorError>;
