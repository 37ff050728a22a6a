use clap::Parser;

use super::SelectionArgs;

/// Arguments for the plan command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Summarize the plan for an instance:\n    mcwarm plan \"All the Mods 9\"\n\n\
                  List every planned and skipped file:\n    mcwarm plan atm9 --files --skipped\n\n\
                  Plan for an instance directory:\n    mcwarm plan ~/curseforge/minecraft/Instances/atm9")]
pub struct PlanArgs {
    /// Instance names (case-insensitive) or instance directories
    #[arg(required = true, value_name = "INSTANCE")]
    pub instances: Vec<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,

    /// List planned files
    #[arg(long)]
    pub files: bool,

    /// List skipped files with reasons
    #[arg(long)]
    pub skipped: bool,

    /// Print plans as JSON
    #[arg(long)]
    pub json: bool,
}
