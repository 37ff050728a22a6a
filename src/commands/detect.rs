//! Detect command implementation

use console::Style;

use mcwarm::error::{Result, launcher_not_found};
use mcwarm::launcher::detect_launcher;

use super::helpers::Context;
use crate::cli::DetectArgs;

/// Run detect command
pub fn run(ctx: &Context, args: DetectArgs) -> Result<()> {
    let name = args.kind.display_name();
    let detected = ctx
        .dirs
        .as_ref()
        .and_then(|dirs| detect_launcher(args.kind, ctx.os, dirs))
        .ok_or_else(|| launcher_not_found(name))?;

    println!(
        "{} {}",
        Style::new().bold().green().apply_to(format!("Detected {name} at")),
        detected.executable.display()
    );
    println!("  Launch command: {}", detected.command_template);
    println!("  Use it with: mcwarm warm <INSTANCE> --launch --launch-cmd '<command>'");
    Ok(())
}
