//! Cache error types.

use thiserror::Error;

/// Errors raised by a [`crate::KeyValueStore`].
///
/// These never cross the [`crate::CacheStore`] boundary: the store logs them
/// and reports a miss (or does nothing) instead.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem error from a file-backed store.
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode or decode a stored value.
    #[error("cache serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored value or key could not be interpreted.
    #[error("corrupt cache entry '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}
