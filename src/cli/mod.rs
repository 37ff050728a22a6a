//! CLI definitions using clap derive API
//!
//! Each command's arguments live in their own submodule; selection flags
//! shared by `plan` and `warm` are in [`selection`].

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod detect;
pub mod list;
pub mod open;
pub mod plan;
pub mod reveal;
pub mod selection;
pub mod warm;

pub use completions::CompletionsArgs;
pub use detect::DetectArgs;
pub use list::ListArgs;
pub use open::OpenArgs;
pub use plan::PlanArgs;
pub use reveal::RevealArgs;
pub use selection::SelectionArgs;
pub use warm::WarmArgs;

/// mcwarm - Minecraft instance cache warmer
///
/// Reads modpack files ahead of time so the next launch hits the page cache.
#[derive(Parser, Debug)]
#[command(
    name = "mcwarm",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Pre-warm the OS page cache for modded Minecraft instances",
    long_about = "mcwarm finds CurseForge and Prism Launcher instances and reads their mod \
                  archives, assets and configs ahead of time, so the next game launch is served \
                  from memory instead of a cold disk.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mcwarm list                              \x1b[90m# Discovered instances\x1b[0m\n   \
                  mcwarm plan \"All the Mods 9\"             \x1b[90m# What would be read\x1b[0m\n   \
                  mcwarm warm atm9 --max-gb 4              \x1b[90m# Warm up to 4 GB\x1b[0m\n   \
                  mcwarm warm atm9 --dry-run               \x1b[90m# Report without reading\x1b[0m\n   \
                  mcwarm warm atm9 --launch                \x1b[90m# Warm, then start the launcher\x1b[0m\n   \
                  mcwarm --root /mnt/games/instances list  \x1b[90m# Search an extra directory\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to <config dir>/mcwarm/config.yaml)
    #[arg(long, short = 'c', global = true, env = "MCWARM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Additional directory to search for instances (repeatable)
    #[arg(long = "root", short = 'r', global = true, value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Only search directories given with --root or in the config file
    #[arg(long, global = true)]
    pub no_default_roots: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the launcher directories that are searched
    Roots,

    /// List discovered instances
    List(ListArgs),

    /// Show which files would be warmed
    Plan(PlanArgs),

    /// Read instance files into the page cache
    Warm(WarmArgs),

    /// Open an instance folder in the file browser
    Reveal(RevealArgs),

    /// Find an installed launcher
    Detect(DetectArgs),

    /// Open a launcher application
    Open(OpenArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcwarm::domain::LauncherKind;

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["mcwarm", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_list_kind() {
        let cli = Cli::try_parse_from(["mcwarm", "list", "--kind", "prism"]).unwrap();
        match cli.command {
            Commands::List(args) => assert_eq!(args.kind, Some(LauncherKind::Prism)),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_cli_parsing_roots() {
        let cli = Cli::try_parse_from(["mcwarm", "roots"]).unwrap();
        assert!(matches!(cli.command, Commands::Roots));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["mcwarm", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from([
            "mcwarm",
            "-v",
            "list",
            "--root",
            "/srv/a",
            "--root",
            "/srv/b",
            "--config",
            "/tmp/mcwarm.yaml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.roots, vec![PathBuf::from("/srv/a"), PathBuf::from("/srv/b")]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/mcwarm.yaml")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["mcwarm", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, clap_complete::Shell::Bash),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["mcwarm", "completions", "tcsh"]).is_err());
    }

    #[test]
    fn test_cli_parsing_open() {
        let cli = Cli::try_parse_from(["mcwarm", "open", "curseforge"]).unwrap();
        match cli.command {
            Commands::Open(args) => {
                assert_eq!(args.kind, LauncherKind::CurseForge);
                assert!(args.command.is_none());
            }
            _ => panic!("Expected Open command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_kind() {
        assert!(Cli::try_parse_from(["mcwarm", "detect", "atlauncher"]).is_err());
    }
}
