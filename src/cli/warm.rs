use clap::Parser;

use super::SelectionArgs;

/// Arguments for the warm command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Warm one instance:\n    mcwarm warm \"All the Mods 9\"\n\n\
                  See what would be read:\n    mcwarm warm atm9 --dry-run\n\n\
                  Warm with four readers, then start Prism Launcher:\n    mcwarm warm atm9 --jobs 4 --launch\n\n\
                  Use a custom launch command:\n    mcwarm warm atm9 --launch --launch-cmd 'prismlauncher --launch {instance}'")]
pub struct WarmArgs {
    /// Instance names (case-insensitive) or instance directories
    #[arg(required = true, value_name = "INSTANCE")]
    pub instances: Vec<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Report what would be read without reading
    #[arg(long)]
    pub dry_run: bool,

    /// Number of files read in parallel
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<usize>,

    /// Start the launcher for the first instance afterwards
    #[arg(long)]
    pub launch: bool,

    /// Launch command template; {instance} is the folder name, {path} the full path
    #[arg(long, value_name = "TEMPLATE", requires = "launch")]
    pub launch_cmd: Option<String>,

    /// Hide the progress bar
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
