//! Error types for the cards crate.

use thiserror::Error;

/// Result type for card operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while displaying cards.
#[derive(Debug, Error)]
pub enum Error {
    /// The card fragment could not be fetched.
    #[error("Card fetch failed: {0}")]
    Fetch(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}
