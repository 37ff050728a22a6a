//! Shell completions command

use clap::CommandFactory;

use mcwarm::error::Result;

use crate::cli::{Cli, CompletionsArgs};

/// Write completions for `args.shell` to stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    generate(args.shell, &mut std::io::stdout().lock());
    Ok(())
}

fn generate(shell: clap_complete::Shell, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}
