use folio_cache::{CacheStore, FileStore};
use folio_config::FolioConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CacheCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RemovedResponse {
    removed: usize,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    dir: String,
    repos: Vec<String>,
    count: usize,
}

/// Handle `folio cache`.
pub fn handle(
    action: &CacheCommands,
    config: &FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let cache = open(config);

    match action {
        CacheCommands::Sweep => output(
            &RemovedResponse {
                removed: cache.sweep_expired(),
            },
            flags.format,
        ),
        CacheCommands::Clear => output(
            &RemovedResponse {
                removed: cache.clear(),
            },
            flags.format,
        ),
        CacheCommands::List => {
            let repos = cache.ids();
            output(
                &ListResponse {
                    dir: config.cache.dir.display().to_string(),
                    count: repos.len(),
                    repos,
                },
                flags.format,
            )
        }
    }
}

fn open(config: &FolioConfig) -> CacheStore<FileStore> {
    CacheStore::new(
        FileStore::new(&config.cache.dir),
        config.cache.key_prefix.clone(),
        config.cache.ttl(),
    )
}
