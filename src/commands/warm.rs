//! Warm command implementation
//!
//! Plans and executes each requested instance in turn, then optionally starts
//! the launcher for the first one. The byte limit covers the whole run.

use std::time::Instant;

use console::{Style, Term};
use tracing::{debug, warn};

use mcwarm::common::format_size;
use mcwarm::domain::{Instance, RunState, WarmMode};
use mcwarm::error::{Result, WarmerError, launcher_not_found};
use mcwarm::executor::{CancellationToken, ExecuteOptions, WarmExecutor};
use mcwarm::launcher::{self, detect_launcher};
use mcwarm::progress::ProgressDisplay;
use mcwarm::selector::{ByteBudget, select};

use super::helpers::Context;
use crate::cli::WarmArgs;

/// Run warm command
pub fn run(ctx: &Context, args: WarmArgs) -> Result<()> {
    let mut selection = ctx.config.selection.clone();
    args.selection.apply(&mut selection)?;

    let mut execution = ctx.config.execution.clone();
    if args.dry_run {
        execution.dry_run = true;
    }
    if let Some(jobs) = args.jobs {
        execution.jobs = jobs;
    }
    execution.validate()?;
    let options = ExecuteOptions::from(&execution);

    let instances = ctx.find_instances(&args.instances)?;
    let cancel = CancellationToken::new();
    cancel_on_interrupt(&cancel);

    let show_progress = !args.quiet && Term::stderr().is_term();
    let mut executor = WarmExecutor::new();
    let mut budget = ByteBudget::new(selection.max_total_bytes);
    let started = Instant::now();
    let mut warmed = 0;
    let mut total_bytes = 0;
    let mut total_files = 0;
    let mut last_empty = None;

    for instance in &instances {
        if cancel.is_cancelled() {
            debug!(instance = %instance.name, "skipping instance after cancellation");
            break;
        }
        let Some(instance_selection) = budget.selection_for(&selection) else {
            println!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to(format!("Read limit reached before {}", instance.name))
            );
            break;
        };

        let plan = select(instance, &instance_selection)?;
        let display = if show_progress {
            ProgressDisplay::new(&instance.name, plan.total_bytes())
        } else {
            ProgressDisplay::hidden()
        };

        let result = match executor.execute(&plan, &options, &cancel, &display) {
            Ok(result) => result,
            Err(err @ WarmerError::EmptyPlan { .. }) => {
                display.abandon();
                warn!(instance = %instance.name, "nothing to warm");
                eprintln!("{err}");
                last_empty = Some(err);
                continue;
            }
            Err(err) => {
                display.abandon();
                return Err(err);
            }
        };

        if result.state == RunState::Cancelled {
            display.abandon();
        } else {
            display.finish();
        }
        warmed += 1;
        budget.consume(result.bytes_read);
        total_bytes += result.bytes_read;
        total_files += result.files_succeeded;

        println!("{}", result.summary());
        if plan.is_truncated() {
            println!(
                "  {}",
                Style::new().dim().apply_to(format!(
                    "{} file(s) left out by limits",
                    plan.skipped().iter().filter(|s| s.reason.is_bound()).count()
                ))
            );
        }
    }

    if warmed == 0 {
        if let Some(err) = last_empty {
            return Err(err);
        }
    }
    if warmed > 0 {
        let verb = match options.mode {
            WarmMode::DryRun => "would warm",
            WarmMode::Real => "warmed",
        };
        println!(
            "All done in {:.1}s. Total {verb} {} in {total_files} file(s) across {warmed} instance(s)",
            started.elapsed().as_secs_f64(),
            format_size(total_bytes)
        );
    }

    if cancel.is_cancelled() {
        println!("{}", Style::new().yellow().apply_to("Cancelled."));
        return Ok(());
    }

    if args.launch {
        if let Some(first) = instances.first() {
            launch_instance(ctx, args.launch_cmd.as_deref(), first)?;
        }
    }

    Ok(())
}

/// Launch template from the flag, the config file, or a detected launcher
fn launch_instance(ctx: &Context, flag: Option<&str>, instance: &Instance) -> Result<()> {
    let template = match flag.or(ctx.config.launch.command.as_deref()) {
        Some(template) => template.to_string(),
        None => ctx
            .dirs
            .as_ref()
            .and_then(|dirs| detect_launcher(instance.kind, ctx.os, dirs))
            .map(|detected| detected.command_template)
            .ok_or_else(|| launcher_not_found(instance.kind.display_name()))?,
    };

    launcher::launch(&template, instance)?;
    println!(
        "{} {}",
        Style::new().bold().green().apply_to("Launched"),
        instance.name
    );
    Ok(())
}

/// First Ctrl-C cancels between files; a second one exits immediately
#[cfg(unix)]
fn cancel_on_interrupt(cancel: &CancellationToken) {
    use signal_hook::consts::SIGINT;
    use signal_hook::flag;

    let flag = cancel.as_flag();
    // Registration order matters: the conditional exit must see the flag unset
    // on the first signal.
    let registered = flag::register_conditional_shutdown(SIGINT, 130, flag.clone())
        .and_then(|_| flag::register(SIGINT, flag));
    if let Err(e) = registered {
        warn!("Failed to register Ctrl-C handler: {e}");
    }
}

#[cfg(not(unix))]
fn cancel_on_interrupt(_cancel: &CancellationToken) {}
