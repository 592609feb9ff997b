//! Error types for spam-rs

use thiserror::Error;

/// Result type alias for classifier operations
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Classifier error types
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// Prediction requested before any training data was seen
    #[error("Classifier has not been trained")]
    Untrained,

    /// Label outside of {0, 1}
    #[error("Invalid label: {0} (expected 0 for ham or 1 for spam)")]
    InvalidLabel(u8),

    /// Input rejected by the caller-side length check
    #[error("Input too short: {len} characters (minimum {min})")]
    InputTooShort { len: usize, min: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed training corpus
    #[error("Corpus error at line {line}: {message}")]
    Corpus { line: usize, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
