use folio_config::FolioConfig;

use crate::cli::{Commands, GlobalFlags};

pub mod build;
pub mod cache;
pub mod list;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &FolioConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Build(args) => build::handle(&args, config, flags).await,
        Commands::List => list::handle(config, flags).await,
        Commands::Cache { action } => cache::handle(&action, config, flags),
    }
}
