use std::path::Path;

use anyhow::Context;
use folio_config::FolioConfig;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory, then the layered config.
/// `--config` adds an explicit file above the default TOML locations.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FolioConfig> {
    load_dotenv()?;

    match flags.config.as_deref() {
        Some(path) => FolioConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => FolioConfig::load().context("failed to load config"),
    }
}

fn load_dotenv() -> anyhow::Result<()> {
    let env_path = Path::new(".env");
    if env_path.is_file() {
        dotenvy::from_path(env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
