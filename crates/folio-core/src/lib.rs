//! # folio-core
//!
//! Core types and ordering rules for Folio.
//!
//! This crate provides the foundational types shared across all Folio crates:
//! - `RepoId`, the validated `owner/name` pair addressing a hosted repository
//! - `ProjectConfig`, the author-provided static entry for one project
//! - `RemotePayload`, the snapshot fetched from (or synthesized for) a repository
//! - `ProjectRecord`, the render-ready value handed to the card renderer
//! - Typed URL builders for the repository page and social preview endpoints
//! - The featured-first gallery ordering
//! - Cross-cutting error types

pub mod errors;
pub mod ordering;
pub mod payload;
pub mod project;
pub mod repo_id;
pub mod stat;
pub mod urls;

pub use errors::CoreError;
pub use ordering::{gallery_order, sort_gallery};
pub use payload::RemotePayload;
pub use project::{ProjectConfig, ProjectRecord};
pub use repo_id::RepoId;
pub use stat::Stat;

/// Placeholder description for a repository whose description is empty.
pub const NO_DESCRIPTION: &str = "No description available";

/// Placeholder description used when live repository data is unavailable.
pub const UNAVAILABLE_DESCRIPTION: &str = "Repository information temporarily unavailable";

/// Image shown when neither a custom image nor a repository preview applies.
pub const DEFAULT_IMAGE_URL: &str =
    "https://raw.githubusercontent.com/github/explore/master/topics/github/github.png";

/// Current wall-clock time as epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
