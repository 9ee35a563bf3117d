// src/error.rs

//! Crate-wide error type

use thiserror::Error;

use crate::index::ItemKind;

/// Result type for docnav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in docnav
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem read/write failed
    #[error("I/O error: {0}")]
    IoError(String),

    /// Malformed sidebar payload or source file
    #[error("Parse error: {0}")]
    ParseError(String),

    /// An identifier appears twice under the same kind
    #[error("Duplicate {kind} entry: {name}")]
    DuplicateEntry { kind: ItemKind, name: String },

    /// Kind label not in the rustdoc kind set
    #[error("Unknown item kind: {0}")]
    UnknownKind(String),

    /// Requested file, module, or entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Public surface could not be extracted from a module
    #[error("Extraction failed for {path}: {message}")]
    ExtractError { path: String, message: String },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Setting up a client or other resource failed
    #[error("Initialization error: {0}")]
    InitError(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err.to_string())
    }
}
