//! The page controller: owns everything one page load needs.

use folio_cache::{CacheStore, FileStore, KeyValueStore};
use folio_config::FolioConfig;
use folio_core::ProjectConfig;
use folio_github::GithubClient;

use crate::error::GalleryError;
use crate::loader::{self, GalleryOutcome};
use crate::render::{CardRenderer, PageMessage};
use crate::resolver::ProjectResolver;
use crate::source::RemoteSource;

/// The rendered result of a page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// `None` when rendering failed and `html` is the load-error page.
    pub outcome: Option<GalleryOutcome>,
    pub html: String,
}

/// One page lifetime: the static project list plus the resolver and
/// renderer it is shown through.
pub struct Page<R, S> {
    projects: Vec<ProjectConfig>,
    resolver: ProjectResolver<R, S>,
    renderer: CardRenderer,
}

impl Page<GithubClient, FileStore> {
    /// Wire a page from configuration: live client, file-backed cache.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError`] if the client or the templates cannot be built.
    pub fn from_config(config: &FolioConfig) -> Result<Self, GalleryError> {
        let client = GithubClient::new(&config.fetch)?;
        let cache = CacheStore::new(
            FileStore::new(&config.cache.dir),
            config.cache.key_prefix.clone(),
            config.cache.ttl(),
        );
        Self::new(config.projects.clone(), ProjectResolver::new(client, cache))
    }
}

impl<R: RemoteSource, S: KeyValueStore> Page<R, S> {
    /// # Errors
    ///
    /// Returns [`GalleryError::Render`] if the templates fail to compile.
    pub fn new(
        projects: Vec<ProjectConfig>,
        resolver: ProjectResolver<R, S>,
    ) -> Result<Self, GalleryError> {
        Ok(Self {
            projects,
            resolver,
            renderer: CardRenderer::new()?,
        })
    }

    pub fn projects(&self) -> &[ProjectConfig] {
        &self.projects
    }

    pub const fn resolver(&self) -> &ProjectResolver<R, S> {
        &self.resolver
    }

    /// Resolve and order every configured project.
    pub async fn load(&self) -> GalleryOutcome {
        loader::load_all(&self.resolver, &self.projects).await
    }

    /// Full page load: sweep expired cache entries, load the gallery, and
    /// render it. A render failure yields the load-error page instead.
    pub async fn on_load(&self) -> PageView {
        self.resolver.cache().sweep_expired();
        let outcome = self.load().await;

        match self.renderer.render_page(&outcome) {
            Ok(html) => PageView {
                outcome: Some(outcome),
                html,
            },
            Err(error) => {
                tracing::error!(%error, "error loading projects");
                PageView {
                    outcome: None,
                    html: PageMessage::LoadError.page(),
                }
            }
        }
    }
}
