/// Error types for the transit dashboard core library
use thiserror::Error;

/// Main error type for query parameters, API calls and response decoding
#[derive(Error, Debug)]
pub enum TransitError {
    /// Service selector outside the 1..=4 range
    #[error("Invalid service selector: {0:?} (expected 1, 2, 3 or 4)")]
    InvalidService(String),

    /// Limit that is neither a positive integer nor "all"
    #[error("Invalid result limit: {0:?} (expected a positive integer or \"all\")")]
    InvalidLimit(String),

    /// Unknown query view name
    #[error("Unknown query view: {0:?}")]
    UnknownView(String),

    /// The API answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    /// The request never produced a response body
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// The response body did not match the endpoint's schema
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for TransitError {
    fn from(err: reqwest::Error) -> Self {
        TransitError::Transport(err.to_string())
    }
}

/// Type alias for Results using TransitError
pub type Result<T> = std::result::Result<T, TransitError>;
