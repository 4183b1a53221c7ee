//! Error types for the sync crate.

use thiserror::Error;

/// Result type for sync operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing POI files.
#[derive(Debug, Error)]
pub enum Error {
    /// The download collaborator reported a failure.
    #[error("Download failed: {0}")]
    Download(String),

    /// The downloaded document was not a usable POI document.
    #[error("Invalid POI document: {0}")]
    InvalidDocument(String),

    /// Failure in the core file pipeline.
    #[error(transparent)]
    Core(#[from] waymark_core::Error),
}
