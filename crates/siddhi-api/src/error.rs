//! Internal error types for Siddhi API operations.
//!
//! These errors stay inside `siddhi-api` and are mapped to core registry
//! errors at the port boundary.

use thiserror::Error;

/// Result type alias for Siddhi API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to Siddhi API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("Siddhi API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from Siddhi API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The client could not be set up from its configuration.
    #[error("Invalid client configuration: {message}")]
    Configuration { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
