//! Error types for the layers crate.

use thiserror::Error;

/// Result type for layer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while managing POI layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetched document was valid JSON but not a usable POI document.
    #[error("Invalid POI document: {0}")]
    InvalidDocument(String),

    /// The host map widget rejected an operation.
    #[error("Map error: {0}")]
    Map(String),

    /// Failure in the core file pipeline.
    #[error(transparent)]
    Core(#[from] waymark_core::Error),
}
