//! Remote metadata API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_api_base() -> String {
    "https://api.github.com/repos".to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    concat!("folio/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_accept() -> String {
    "application/vnd.github.v3+json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Base URL repository paths are appended to (`{api_base}/{owner}/{repo}`).
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Bound on each individual request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// `Accept` header sent with every API request.
    #[serde(default = "default_accept")]
    pub accept: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            accept: default_accept(),
        }
    }
}

impl FetchConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "fetch.timeout_secs",
                "must be greater than zero",
            ));
        }
        if !(self.api_base.starts_with("https://") || self.api_base.starts_with("http://")) {
            return Err(ConfigError::invalid(
                "fetch.api_base",
                format!("'{}' is not an absolute http(s) URL", self.api_base),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::invalid("fetch.user_agent", "must not be empty"));
        }
        Ok(())
    }
}
