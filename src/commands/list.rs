//! List command implementation
//!
//! Lists discovered instances grouped by launcher, CurseForge first.

use console::Style;

use mcwarm::domain::Instance;
use mcwarm::error::Result;

use super::helpers::{Context, display_path};
use crate::cli::ListArgs;

/// Run list command
pub fn run(ctx: &Context, args: ListArgs) -> Result<()> {
    let instances = ctx.instances(args.kind)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&instances)?);
        return Ok(());
    }

    if instances.is_empty() {
        println!("No instances found.");
        println!("Run 'mcwarm roots -v' to see where mcwarm looks.");
        return Ok(());
    }

    println!("Instances ({}):", instances.len());
    println!();
    for instance in &instances {
        display_instance(ctx, instance);
    }

    Ok(())
}

fn display_instance(ctx: &Context, instance: &Instance) {
    println!("  {}", Style::new().bold().yellow().apply_to(&instance.name));
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Launcher:"),
        instance.kind.display_name()
    );
    println!(
        "    {} {}",
        Style::new().bold().apply_to("Path:"),
        display_path(&instance.root_path, ctx.dirs.as_ref())
    );
}
