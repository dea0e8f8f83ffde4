//! Network-free reconstruction of a repository payload.

use folio_core::{ProjectConfig, RemotePayload, RepoId, Stat, UNAVAILABLE_DESCRIPTION, urls};

/// Signature shared by [`fallback`] and test doubles injected into the
/// resolver.
pub type FallbackFn = fn(&str, Option<&ProjectConfig>) -> Option<RemotePayload>;

/// Build a minimal payload for `repo` from `config` alone (or placeholders).
///
/// `repo` is the raw `owner/name` identifier, as used for cache keys. Never
/// performs I/O. Returns `None` when no payload can be synthesized, which the
/// caller must treat as "this project cannot be displayed".
#[must_use]
pub fn fallback(repo: &str, config: Option<&ProjectConfig>) -> Option<RemotePayload> {
    let id: RepoId = match repo.parse() {
        Ok(id) => id,
        Err(error) => {
            tracing::error!(repo, %error, "fallback method failed");
            return None;
        }
    };

    let repo_url = urls::repo_page_url(&id);
    Some(RemotePayload {
        name: id.name().to_string(),
        description: config
            .and_then(ProjectConfig::description)
            .unwrap_or(UNAVAILABLE_DESCRIPTION)
            .to_string(),
        stars: config
            .and_then(|c| c.stars.clone())
            .unwrap_or_else(Stat::unknown),
        forks: config
            .and_then(|c| c.forks.clone())
            .unwrap_or_else(Stat::unknown),
        languages: config.map(|c| c.languages.clone()).unwrap_or_default(),
        homepage: Some(repo_url.clone()),
        html_url: repo_url,
        topics: Vec::new(),
        image: urls::card_image_url(Some(&id), config.and_then(ProjectConfig::custom_image)),
        last_updated: None,
    })
}
