//! Cross-cutting error types for Folio.
//!
//! Domain-specific errors (`FetchError`, `CacheError`, `GalleryError`) are
//! defined in their respective crates. The binary converges them through
//! `anyhow`.

use thiserror::Error;

/// Errors raised while constructing core domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A repository identifier is not a well-formed `owner/name` pair.
    #[error("Invalid repository identifier '{value}': {reason}")]
    InvalidRepoId { value: String, reason: String },
}
