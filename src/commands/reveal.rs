//! Reveal command implementation

use mcwarm::error::Result;
use mcwarm::launcher;

use super::helpers::Context;
use crate::cli::RevealArgs;

/// Run reveal command
pub fn run(ctx: &Context, args: RevealArgs) -> Result<()> {
    let instance = ctx.find_instance(&args.instance)?;
    launcher::reveal(&instance.root_path, ctx.os)?;
    println!("Opened folder: {}", instance.root_path.display());
    Ok(())
}
