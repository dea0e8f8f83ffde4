use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `folio` binary.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Folio - project gallery builder")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra config file layered above folio.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::CacheCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["folio", "--format", "raw", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "cache", "sweep", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Cache {
                action: CacheCommands::Sweep
            }
        ));
    }

    #[test]
    fn build_accepts_output_path() {
        let cli = Cli::try_parse_from(["folio", "build", "--out", "public/index.html"])
            .expect("cli should parse");
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.out.as_deref(), Some(Path::new("public/index.html")));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["folio", "--format", "table", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn cache_requires_action() {
        assert!(Cli::try_parse_from(["folio", "cache"]).is_err());
    }

    #[test]
    fn log_level_follows_quiet_and_verbose() {
        let level = |args: &[&str]| {
            Cli::try_parse_from(args.iter().copied())
                .expect("cli should parse")
                .global_flags()
                .log_level()
        };

        assert_eq!(level(&["folio", "list"]), "warn");
        assert_eq!(level(&["folio", "--verbose", "list"]), "debug");
        assert_eq!(level(&["folio", "list", "--quiet"]), "error");
        assert_eq!(level(&["folio", "-q", "-v", "list"]), "error");
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["folio", "--config", "/tmp/site.toml", "build"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(Path::new("/tmp/site.toml")));
    }
}
