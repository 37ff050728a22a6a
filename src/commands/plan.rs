//! Plan command implementation
//!
//! Builds the warm plan for each instance and prints it without reading any
//! file contents. Later instances get what earlier ones left of the byte limit.

use std::collections::BTreeMap;

use console::Style;

use mcwarm::common::format_size;
use mcwarm::domain::WarmPlan;
use mcwarm::error::Result;
use mcwarm::selector::{ByteBudget, select};

use super::helpers::{Context, display_path};
use crate::cli::PlanArgs;

/// Run plan command
pub fn run(ctx: &Context, args: PlanArgs) -> Result<()> {
    let mut selection = ctx.config.selection.clone();
    args.selection.apply(&mut selection)?;

    let instances = ctx.find_instances(&args.instances)?;
    let mut budget = ByteBudget::new(selection.max_total_bytes);
    let mut plans = Vec::with_capacity(instances.len());
    for instance in &instances {
        let Some(instance_selection) = budget.selection_for(&selection) else {
            break;
        };
        let plan = select(instance, &instance_selection)?;
        budget.consume(plan.total_bytes());
        plans.push(plan);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    for (index, plan) in plans.iter().enumerate() {
        if index > 0 {
            println!();
        }
        display_plan(ctx, plan, &args);
    }

    Ok(())
}

fn display_plan(ctx: &Context, plan: &WarmPlan, args: &PlanArgs) {
    let instance = plan.instance();
    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to(&instance.name),
        Style::new().dim().apply_to(format!(
            "({}, {})",
            instance.kind.display_name(),
            display_path(&instance.root_path, ctx.dirs.as_ref())
        ))
    );

    for (category, count, bytes) in plan.counts_by_category() {
        println!(
            "  {:<12} {:>6} file(s) {:>10}",
            category.to_string(),
            count,
            format_size(bytes)
        );
    }
    println!(
        "  {:<12} {:>6} file(s) {:>10}",
        Style::new().bold().apply_to("total"),
        plan.file_count(),
        format_size(plan.total_bytes())
    );

    if !plan.skipped().is_empty() {
        let summary = skip_summary(plan)
            .into_iter()
            .map(|(reason, count)| format!("{count} {reason}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  skipped {}: {summary}", plan.skipped().len());
    }
    if plan.is_truncated() {
        println!(
            "  {}",
            Style::new()
                .yellow()
                .apply_to("Plan truncated by a limit; use --unbounded or raise --max-gb to read more")
        );
    }

    if args.files {
        println!();
        println!("  {}", Style::new().bold().apply_to("Files:"));
        for file in plan.files() {
            println!(
                "    {:>10}  {}",
                format_size(file.size_bytes),
                file.path.display()
            );
        }
    }

    if args.skipped && !plan.skipped().is_empty() {
        println!();
        println!("  {}", Style::new().bold().apply_to("Skipped:"));
        for skipped in plan.skipped() {
            println!("    {}  ({})", skipped.path.display(), skipped.reason);
        }
    }
}

/// Skip counts keyed by a short reason label
fn skip_summary(plan: &WarmPlan) -> BTreeMap<&'static str, usize> {
    use mcwarm::domain::SkipReason;

    let mut counts = BTreeMap::new();
    for skipped in plan.skipped() {
        let label = match skipped.reason {
            SkipReason::ByteBound => "over byte limit",
            SkipReason::FileBound => "over file limit",
            SkipReason::Unreadable { .. } => "unreadable",
            SkipReason::OutsideInstance { .. } => "outside instance",
            SkipReason::Excluded { .. } => "excluded",
            SkipReason::Duplicate { .. } => "duplicate",
        };
        *counts.entry(label).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcwarm::domain::{CandidateFile, Category, Instance, LauncherKind, SkipReason, SkippedFile};

    #[test]
    fn test_skip_summary_groups_reasons() {
        let instance = Instance::new("Pack", "/p", LauncherKind::Prism, "/p/.minecraft");
        let mut plan = WarmPlan::new(instance);
        plan.push(CandidateFile::new("/p/.minecraft/mods/a.jar", 1, Category::ModArchive));
        for name in ["b.jar", "c.jar"] {
            plan.skip(SkippedFile {
                path: format!("/p/.minecraft/mods/{name}").into(),
                category: Category::ModArchive,
                size_bytes: Some(1),
                reason: SkipReason::ByteBound,
            });
        }
        plan.skip(SkippedFile {
            path: "/p/.minecraft/mods/d.jar".into(),
            category: Category::ModArchive,
            size_bytes: Some(1),
            reason: SkipReason::Excluded {
                pattern: "mods/d*".to_string(),
            },
        });

        let counts = skip_summary(&plan);
        assert_eq!(counts.get("over byte limit"), Some(&2));
        assert_eq!(counts.get("excluded"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
