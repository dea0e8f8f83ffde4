use serde::{Deserialize, Serialize};

use crate::stat::Stat;

/// Repository data as fetched from the hosting API, or as synthesized by the
/// fallback path when the API is unavailable.
///
/// This is the value persisted in the cache. It deliberately carries none of
/// the config-owned fields (store links, featured flag) so that edits to the
/// project configuration take effect without waiting for cache expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemotePayload {
    pub name: String,
    pub description: String,
    pub stars: Stat,
    pub forks: Stat,
    /// Language labels, deduplicated. Order is not significant.
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    /// Canonical repository page.
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Card image, already resolved through the override-or-preview rule.
    pub image: String,
    /// Epoch milliseconds of the live fetch. `None` for synthesized payloads.
    #[serde(default)]
    pub last_updated: Option<i64>,
}
