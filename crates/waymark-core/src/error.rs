//! Error types for the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the core pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A referenced file, layer, or handler does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Host file access failed.
    #[error("File access failed: {0}")]
    File(String),

    /// Fetched content was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A document was valid JSON but had the wrong shape.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Other error.
    #[error("Other: {0}")]
    Other(#[from] anyhow::Error),
}
