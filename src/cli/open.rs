use clap::Parser;

use mcwarm::domain::LauncherKind;

/// Arguments for the open command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Open the CurseForge app:\n    mcwarm open curseforge\n\n\
                  Open Prism Launcher from a custom location:\n    mcwarm open prism --command '/opt/prism/prismlauncher'")]
pub struct OpenArgs {
    /// Launcher to open (curseforge, prism)
    #[arg(value_name = "KIND")]
    pub kind: LauncherKind,

    /// Command to run instead of the configured or detected launcher
    #[arg(long, value_name = "COMMAND")]
    pub command: Option<String>,
}
