//! Fetch error types.

use thiserror::Error;

/// Errors that can occur when fetching repository metadata.
///
/// [`FetchError::RateLimited`] is the distinguished condition callers must
/// not retry inline; every other variant is a plain network failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport error, including request timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse an API response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The API refused the request because of rate limiting (403).
    #[error("rate limited ({status}), retry after {retry_after_secs}s")]
    RateLimited {
        /// HTTP status code returned by the API.
        status: u16,
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl FetchError {
    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Whether the request was aborted by its timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
