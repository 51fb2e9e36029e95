//! Error types for the rocagem-core library.

use thiserror::Error;

/// Main error type for the rocagem library.
#[derive(Error, Debug)]
pub enum RocagemError {
    /// Record extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Remote store import error.
    #[error("import error: {0}")]
    Import(#[from] ImportError),

    /// JSON serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while turning a single OCR line into an area record.
///
/// These never escape a batch: the parser turns them into diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Neither split strategy produced enough fields.
    #[error("too few fields ({found}, need at least {required})")]
    TooFewFields { found: usize, required: usize },

    /// A mandatory field resolved to an empty value.
    #[error("missing required fields: {0}")]
    MissingField(String),
}

/// Errors related to pushing records into the remote store.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The request could not be sent or the store answered with a failure.
    #[error("request failed: {0}")]
    Request(String),

    /// The store answered without the inserted row.
    #[error("invalid response from store")]
    InvalidResponse,

    /// Payload could not be encoded or decoded.
    #[error("payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for the rocagem library.
pub type Result<T> = std::result::Result<T, RocagemError>;
