//! Local project cache configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_dir() -> PathBuf {
    dirs::cache_dir().map_or_else(|| PathBuf::from(".folio-cache"), |p| p.join("folio"))
}

fn default_key_prefix() -> String {
    "github_repo_".to_string()
}

/// Default entry lifetime: 24 hours.
const fn default_ttl_secs() -> u64 {
    24 * 60 * 60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Directory holding one JSON file per cached repository.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    /// Namespace prefix for every cache key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,

    /// Entry lifetime in seconds. Older entries are evicted on read and by
    /// the load-time sweep.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            key_prefix: default_key_prefix(),
            ttl_secs: default_ttl_secs(),
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_secs == 0 {
            return Err(ConfigError::invalid(
                "cache.ttl_secs",
                "must be greater than zero",
            ));
        }
        if self.key_prefix.is_empty() {
            return Err(ConfigError::invalid("cache.key_prefix", "must not be empty"));
        }
        if self
            .key_prefix
            .chars()
            .any(|c| std::path::is_separator(c) || c.is_whitespace())
        {
            return Err(ConfigError::invalid(
                "cache.key_prefix",
                "must not contain path separators or whitespace",
            ));
        }
        Ok(())
    }
}
