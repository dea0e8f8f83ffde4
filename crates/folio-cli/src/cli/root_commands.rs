use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::CacheCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Load every project and render the gallery page.
    Build(BuildArgs),
    /// Resolve every project and print the ordered records.
    List,
    /// Cache management.
    Cache {
        #[command(subcommand)]
        action: CacheCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Write the page here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
