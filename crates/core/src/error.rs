//! Error types for the BPE tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// Token id with no vocabulary entry
    #[error("Unknown token ID: {0}")]
    UnknownTokenId(u32),

    /// Caller-supplied token ids that could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Persisted record is corrupt or incomplete
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving the merge table or vocabulary
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Merge rule referencing ids that do not exist yet
    #[error("Invalid merge rule: {0}")]
    InvalidMerge(String),
}

impl TokenizerError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            err,
        }
    }
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
