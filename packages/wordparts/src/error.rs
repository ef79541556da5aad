//! Error types for wordparts.
//!
//! Only a handful of conditions are hard failures. Everything the decomposer
//! can recover from (missing entries, ambiguous templates, depth exhaustion)
//! is reported as a [`Diagnostic`](crate::types::Diagnostic) on the result
//! instead of an error.

use thiserror::Error;

/// Main error type for the wordparts library.
#[derive(Debug, Error)]
pub enum WordpartsError {
    /// Heading names and body segments did not line up while splitting markup.
    #[error(
        "Structural mismatch at heading depth {depth}: {headings} heading name(s) but {segments} body segment(s)"
    )]
    StructuralMismatch {
        depth: usize,
        headings: usize,
        segments: usize,
    },

    /// Input word failed validation.
    #[error("Invalid word: '{0}'. Expected a single dictionary headword without markup characters")]
    InvalidWord(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// All retry attempts for a request failed.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Response body exceeded the configured limit.
    #[error("Response too large: {size} bytes (limit {limit})")]
    ResponseTooLarge { size: u64, limit: u64 },

    /// Invalid URL built from a base URL and a word.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Timestamp could not be parsed.
    #[error("Invalid timestamp: '{0}'. Expected RFC 3339 (e.g., 2025-01-01T00:00:00Z)")]
    InvalidTimestamp(String),
}

/// Result type alias for wordparts operations.
pub type Result<T> = std::result::Result<T, WordpartsError>;
