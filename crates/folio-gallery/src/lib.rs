//! # folio-gallery
//!
//! Project resolution, gallery loading, and card rendering for Folio.
//!
//! Data flow for one page load:
//!
//! ```text
//! [ProjectConfig] ─▶ ProjectResolver (cache / RemoteSource / fallback)
//!                 ─▶ load_all (concurrent, drop failures, featured-first)
//!                 ─▶ CardRenderer ─▶ HTML
//! ```
//!
//! [`Page`] owns all of it for a single page lifetime.

mod error;
pub mod fallback;
mod loader;
mod page;
pub mod render;
mod resolver;
mod source;

pub use error::GalleryError;
pub use loader::{GalleryOutcome, load_all};
pub use page::{Page, PageView};
pub use render::{CardRenderer, PageMessage};
pub use resolver::{ProjectResolver, merge, record_from_config};
pub use source::RemoteSource;
