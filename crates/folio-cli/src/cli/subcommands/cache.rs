use clap::Subcommand;

/// Repository snapshot cache management.
#[derive(Clone, Debug, Subcommand)]
pub enum CacheCommands {
    /// Remove entries older than the configured TTL.
    Sweep,
    /// Remove every cached repository snapshot.
    Clear,
    /// List cached repositories.
    List,
}
