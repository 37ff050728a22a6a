use clap::Parser;

/// Arguments for the reveal command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Open an instance folder:\n    mcwarm reveal \"All the Mods 9\"")]
pub struct RevealArgs {
    /// Instance name (case-insensitive) or instance directory
    #[arg(value_name = "INSTANCE")]
    pub instance: String,
}
