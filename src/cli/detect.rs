use clap::Parser;

use mcwarm::domain::LauncherKind;

/// Arguments for the detect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Find Prism Launcher:\n    mcwarm detect prism\n\n\
                  Find the CurseForge app:\n    mcwarm detect curseforge")]
pub struct DetectArgs {
    /// Launcher to look for (curseforge, prism)
    #[arg(value_name = "KIND")]
    pub kind: LauncherKind,
}
