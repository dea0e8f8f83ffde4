//! Per-project resolution: cache, else live fetch, else fallback.

use folio_cache::{CacheStore, KeyValueStore};
use folio_core::{
    DEFAULT_IMAGE_URL, NO_DESCRIPTION, ProjectConfig, ProjectRecord, RemotePayload, Stat, urls,
};

use crate::fallback::{self, FallbackFn};
use crate::source::RemoteSource;

/// Resolves one [`ProjectConfig`] into a render-ready [`ProjectRecord`].
///
/// ```text
/// no repository ─────────────────────────────────▶ Resolved (config only)
/// repository ─▶ cache hit ───────────────────────▶ Resolved (payload ⊕ config)
///            └▶ miss ─▶ fetch ok ─▶ cache put ───▶ Resolved (payload ⊕ config)
///                     └▶ fetch err ─▶ fallback ──▶ cache put ─▶ Resolved
///                                             └▶ none ──────▶ Failed
/// ```
///
/// Every error is contained here; callers only ever see a record or `None`.
pub struct ProjectResolver<R, S> {
    source: R,
    cache: CacheStore<S>,
    fallback: FallbackFn,
}

impl<R: RemoteSource, S: KeyValueStore> ProjectResolver<R, S> {
    pub fn new(source: R, cache: CacheStore<S>) -> Self {
        Self {
            source,
            cache,
            fallback: fallback::fallback,
        }
    }

    /// Replace the fallback resolver.
    #[must_use]
    pub fn with_fallback(mut self, fallback: FallbackFn) -> Self {
        self.fallback = fallback;
        self
    }

    pub const fn cache(&self) -> &CacheStore<S> {
        &self.cache
    }

    pub const fn source(&self) -> &R {
        &self.source
    }

    /// Resolve `config`. `None` means the project cannot be displayed.
    pub async fn resolve(&self, config: &ProjectConfig) -> Option<ProjectRecord> {
        let Some(id) = &config.github else {
            return Some(record_from_config(config));
        };
        let key = id.to_string();

        if let Some(entry) = self.cache.get::<RemotePayload>(&key) {
            tracing::debug!(repo = %id, "using cached data");
            return Some(merge(entry.payload, config));
        }

        tracing::debug!(repo = %id, "fetching fresh data");
        match self.source.fetch_remote(id, config.custom_image()).await {
            Ok(payload) => {
                self.cache.put(&key, &payload);
                Some(merge(payload, config))
            }
            Err(error) => {
                if error.is_rate_limited() {
                    tracing::warn!(repo = %id, %error, "rate limited, using fallback");
                } else {
                    tracing::warn!(repo = %id, %error, "error fetching repo data, using fallback");
                }
                let Some(payload) = (self.fallback)(&key, Some(config)) else {
                    tracing::error!(repo = %id, project = %config.name, "fallback exhausted, dropping project");
                    return None;
                };
                self.cache.put(&key, &payload);
                Some(merge(payload, config))
            }
        }
    }
}

/// Record for a project without a hosted repository.
#[must_use]
pub fn record_from_config(config: &ProjectConfig) -> ProjectRecord {
    let html_url = config
        .chrome_store()
        .or_else(|| config.product_hunt())
        .unwrap_or("#")
        .to_string();

    ProjectRecord {
        name: config.name.clone(),
        description: config.description().unwrap_or(NO_DESCRIPTION).to_string(),
        stars: Stat::not_applicable(),
        forks: Stat::not_applicable(),
        languages: config.languages.clone(),
        html_url,
        homepage: None,
        chrome_store: config.chrome_store().map(str::to_string),
        product_hunt: config.product_hunt().map(str::to_string),
        image: config
            .custom_image()
            .unwrap_or(DEFAULT_IMAGE_URL)
            .to_string(),
        featured: config.featured,
        topics: Vec::new(),
        last_updated: None,
    }
}

/// Combine a payload with its config. The config owns the store link, the
/// announcement link and the featured flag; everything else comes from the
/// payload. Blank payload fields are repaired so every record keeps a name,
/// a description, and an image.
#[must_use]
pub fn merge(payload: RemotePayload, config: &ProjectConfig) -> ProjectRecord {
    let name = if payload.name.trim().is_empty() {
        config.name.clone()
    } else {
        payload.name
    };
    let description = if payload.description.trim().is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        payload.description
    };
    let image = if payload.image.trim().is_empty() {
        urls::card_image_url(config.github.as_ref(), config.custom_image())
    } else {
        payload.image
    };

    let mut languages = Vec::with_capacity(payload.languages.len());
    for language in payload.languages {
        if !languages.contains(&language) {
            languages.push(language);
        }
    }

    ProjectRecord {
        name,
        description,
        stars: payload.stars,
        forks: payload.forks,
        languages,
        html_url: payload.html_url,
        homepage: payload.homepage,
        chrome_store: config.chrome_store().map(str::to_string),
        product_hunt: config.product_hunt().map(str::to_string),
        image,
        featured: config.featured,
        topics: payload.topics,
        last_updated: payload.last_updated,
    }
}
