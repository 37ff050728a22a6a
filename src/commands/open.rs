//! Open command implementation
//!
//! Starts a launcher application without warming anything first.

use console::Style;
use tracing::debug;

use mcwarm::domain::LauncherKind;
use mcwarm::error::{Result, launcher_not_found};
use mcwarm::launcher::{self, detect_launcher, has_placeholder};

use super::helpers::Context;
use crate::cli::OpenArgs;

/// Run open command
pub fn run(ctx: &Context, args: OpenArgs) -> Result<()> {
    let command = resolve_command(ctx, args.kind, args.command)?;
    launcher::open(&command)?;
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Opened"),
        args.kind.display_name()
    );
    Ok(())
}

/// The flag, then a configured command usable without an instance, then detection
fn resolve_command(ctx: &Context, kind: LauncherKind, flag: Option<String>) -> Result<String> {
    if let Some(command) = flag {
        return Ok(command);
    }
    if let Some(configured) = ctx.config.launch.command.as_deref() {
        if has_placeholder(configured) {
            debug!(command = configured, "configured command needs an instance, detecting");
        } else {
            return Ok(configured.to_string());
        }
    }
    ctx.dirs
        .as_ref()
        .and_then(|dirs| detect_launcher(kind, ctx.os, dirs))
        .map(|detected| detected.open_command())
        .ok_or_else(|| launcher_not_found(kind.display_name()))
}
