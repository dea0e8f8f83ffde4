use serde::{Deserialize, Serialize};

use crate::repo_id::RepoId;
use crate::stat::Stat;

/// One author-provided gallery entry.
///
/// Immutable for the lifetime of a page load. Empty strings in the optional
/// text fields are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    /// Hosted repository to fetch live data from. `None` for closed-source
    /// entries, which render from this config alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<RepoId>,
    #[serde(default, alias = "chromeStore", skip_serializing_if = "Option::is_none")]
    pub chrome_store: Option<String>,
    #[serde(default, alias = "productHunt", skip_serializing_if = "Option::is_none")]
    pub product_hunt: Option<String>,
    #[serde(default, alias = "customImage", skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<Stat>,
}

impl ProjectConfig {
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    #[must_use]
    pub fn chrome_store(&self) -> Option<&str> {
        non_empty(self.chrome_store.as_deref())
    }

    #[must_use]
    pub fn product_hunt(&self) -> Option<&str> {
        non_empty(self.product_hunt.as_deref())
    }

    #[must_use]
    pub fn custom_image(&self) -> Option<&str> {
        non_empty(self.custom_image.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A resolved, render-ready project card.
///
/// Produced fresh on every page load by merging a [`crate::RemotePayload`]
/// (or the config alone) with its [`ProjectConfig`]. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub description: String,
    pub stars: Stat,
    pub forks: Stat,
    pub languages: Vec<String>,
    /// Primary link: the repository page, or a store/announcement link (or
    /// `#`) for projects without a repository.
    pub html_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrome_store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_hunt: Option<String>,
    pub image: String,
    pub featured: bool,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
}

impl ProjectRecord {
    /// Whether the primary link points at a hosted repository.
    #[must_use]
    pub fn is_open_source(&self) -> bool {
        self.html_url.contains("github.com")
    }
}
