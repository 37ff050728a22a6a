use clap::Parser;

use mcwarm::domain::LauncherKind;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all instances:\n    mcwarm list\n\n\
                  Only Prism Launcher instances:\n    mcwarm list --kind prism\n\n\
                  Machine-readable output:\n    mcwarm list --json")]
pub struct ListArgs {
    /// Only list instances of this launcher (curseforge, prism)
    #[arg(long, short = 'k', value_name = "KIND")]
    pub kind: Option<LauncherKind>,

    /// Print instances as JSON
    #[arg(long)]
    pub json: bool,
}
