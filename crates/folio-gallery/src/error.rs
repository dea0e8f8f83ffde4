//! Gallery error types.

use thiserror::Error;

/// Page-level failures.
///
/// Individual project failures never appear here: the resolver converts them
/// into a usable record or a dropped project. Only setup and render
/// preparation can fail the page as a whole.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Building or rendering the card templates failed.
    #[error("render error: {0}")]
    Render(#[from] tera::Error),

    /// The metadata client could not be built.
    #[error("client setup error: {0}")]
    Client(#[from] folio_github::FetchError),
}
