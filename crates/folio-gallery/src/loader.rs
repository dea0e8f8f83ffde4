//! Gallery loading: resolve every project concurrently, keep the successes,
//! and order them featured-first.

use folio_cache::KeyValueStore;
use folio_core::{ProjectConfig, ProjectRecord, sort_gallery};
use serde::Serialize;

use crate::resolver::ProjectResolver;
use crate::source::RemoteSource;

/// Result of loading the whole gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GalleryOutcome {
    /// At least one project resolved. Records are in gallery order.
    Loaded {
        projects: Vec<ProjectRecord>,
        dropped: usize,
    },
    /// Nothing resolved (including an empty project list).
    NoProjects { dropped: usize },
}

impl GalleryOutcome {
    /// Resolved records in gallery order; empty for [`Self::NoProjects`].
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        match self {
            Self::Loaded { projects, .. } => projects,
            Self::NoProjects { .. } => &[],
        }
    }

    /// Number of configured projects that could not be displayed.
    #[must_use]
    pub const fn dropped(&self) -> usize {
        match self {
            Self::Loaded { dropped, .. } | Self::NoProjects { dropped } => *dropped,
        }
    }
}

/// Resolve every config concurrently and aggregate the results.
///
/// All resolutions start before any is awaited to completion, and each one
/// runs to its own end: a dropped project never cancels or delays a sibling.
/// The returned order depends only on the records, never on completion order.
pub async fn load_all<R, S>(
    resolver: &ProjectResolver<R, S>,
    configs: &[ProjectConfig],
) -> GalleryOutcome
where
    R: RemoteSource,
    S: KeyValueStore,
{
    let results =
        futures::future::join_all(configs.iter().map(|config| resolver.resolve(config))).await;

    let mut projects: Vec<ProjectRecord> = results.into_iter().flatten().collect();
    let dropped = configs.len() - projects.len();
    if dropped > 0 {
        tracing::warn!(dropped, total = configs.len(), "some projects failed to load");
    }

    if projects.is_empty() {
        tracing::info!(total = configs.len(), "no projects found");
        return GalleryOutcome::NoProjects { dropped };
    }

    sort_gallery(&mut projects);
    tracing::info!(loaded = projects.len(), dropped, "gallery loaded");
    GalleryOutcome::Loaded { projects, dropped }
}
