//! # folio-config
//!
//! Layered configuration loading for Folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. An explicit file passed to [`FolioConfig::load_from`]
//! 3. Project-level `folio.toml`
//! 4. User-level `~/.config/folio/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_FETCH__TIMEOUT_SECS` -> `fetch.timeout_secs`,
//! `FOLIO_CACHE__TTL_SECS` -> `cache.ttl_secs`, etc.
//!
//! The project list is only read from TOML (`[[projects]]` tables), in author
//! order.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//!
//! let config = FolioConfig::load_with_dotenv().expect("config");
//! for project in &config.projects {
//!     println!("{}", project.name);
//! }
//! ```

mod cache;
mod error;
mod fetch;

pub use cache::CacheConfig;
pub use error::ConfigError;
pub use fetch::FetchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use folio_core::ProjectConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    /// Gallery entries, in author order.
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an explicit file layered above the default
    /// TOML locations (environment variables still win).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `path` does not exist, or any
    /// error [`Self::load`] can return.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::invalid(
                "config",
                format!("{} does not exist", path.display()),
            ));
        }
        let figment = Self::file_layers()
            .merge(Toml::file(path))
            .merge(Self::env_layer());
        Self::extract(figment)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::file_layers().merge(Self::env_layer())
    }

    /// Check every value the pipeline depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fetch.validate()?;
        self.cache.validate()?;
        for (index, project) in self.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(ConfigError::invalid(
                    format!("projects[{index}].name"),
                    "must not be empty",
                ));
            }
        }
        Ok(())
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn file_layers() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    fn env_layer() -> Env {
        Env::prefixed("FOLIO_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }
}
