//! Roots command implementation
//!
//! Prints the directories searched for instances. With `--verbose`, default
//! locations that do not exist are listed as well.

use console::Style;

use mcwarm::error::Result;
use mcwarm::resolver::LauncherRoot;

use super::helpers::{Context, display_path};

/// Run roots command
pub fn run(ctx: &Context, verbose: bool) -> Result<()> {
    let roots = ctx.roots()?;

    if verbose {
        let candidates = ctx.default_candidates();
        if !candidates.is_empty() {
            println!("Default locations ({}):", ctx.os);
            for candidate in &candidates {
                let status = if candidate.path.is_dir() {
                    Style::new().green().apply_to("found")
                } else {
                    Style::new().dim().apply_to("missing")
                };
                println!(
                    "  {:<10} {:<8} {}",
                    kind_label(candidate),
                    status,
                    display_path(&candidate.path, ctx.dirs.as_ref())
                );
            }
            println!();
        }
    }

    if roots.is_empty() {
        println!("No launcher directories found.");
        println!("Use --root <DIR> to search a directory of your choice.");
        return Ok(());
    }

    println!("Searching {} director{}:", roots.len(), if roots.len() == 1 { "y" } else { "ies" });
    for root in &roots {
        println!(
            "  {:<10} {}",
            Style::new().bold().apply_to(kind_label(root)),
            display_path(&root.path, ctx.dirs.as_ref())
        );
    }

    Ok(())
}

fn kind_label(root: &LauncherRoot) -> &'static str {
    root.kind.map_or("custom", |kind| kind.display_name())
}
