//! File selection
//!
//! Turns an [`Instance`] and a [`SelectionConfig`] into a [`WarmPlan`]:
//! candidates are collected per category from the rule table, ordered
//! largest first within a category, appended in priority order (mod archives,
//! assets, configs) and cut off at the first bound that would be exceeded.
//! Everything left out is recorded on the plan with a [`SkipReason`].
//!
//! A [`ByteBudget`] carries the byte limit across several instances.

use tracing::{debug, info};

use crate::common::canonicalize;
use crate::config::SelectionConfig;
use crate::domain::{CandidateFile, Category, Instance, SkipReason, SkippedFile, WarmPlan};
use crate::error::{Result, root_not_found};

mod budget;
mod collect;

pub use budget::ByteBudget;

use collect::{Collector, Excludes};

/// Build the warm plan for `instance`.
///
/// Fails only on invalid configuration or a missing instance directory;
/// per-file problems become skip entries on the returned plan.
pub fn select(instance: &Instance, config: &SelectionConfig) -> Result<WarmPlan> {
    config.validate()?;
    let excludes = Excludes::compile(&config.exclude)?;

    let root = canonicalize(&instance.root_path)
        .map_err(|_| root_not_found(instance.root_path.display().to_string()))?;
    if !instance.game_dir.is_dir() {
        return Err(root_not_found(instance.game_dir.display().to_string()));
    }

    let mut collector = Collector::new(&instance.game_dir, &root, config, &excludes);
    let mut plan = WarmPlan::new(instance.clone());
    let mut ordered = Vec::new();

    for category in Category::ALL {
        if !config.includes(category) {
            continue;
        }
        let collected = collector.collect(category);
        for skipped in collected.skipped {
            plan.skip(skipped);
        }
        let mut files = collected.files;
        order_within_category(&mut files);
        debug!(%category, files = files.len(), "collected candidates");
        ordered.extend(files);
    }

    apply_bounds(&mut plan, ordered, config);

    if plan.is_truncated() {
        info!(
            instance = %instance.name,
            planned = plan.file_count(),
            skipped = plan.skipped().iter().filter(|s| s.reason.is_bound()).count(),
            "plan truncated by bound"
        );
    }

    Ok(plan)
}

/// Largest first, ties broken by path
fn order_within_category(files: &mut [CandidateFile]) {
    files.sort_by(|a, b| {
        b.size_bytes
            .cmp(&a.size_bytes)
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// Append `ordered` to the plan until a bound would be exceeded; every later
/// candidate is recorded as skipped with the bound that stopped selection.
fn apply_bounds(plan: &mut WarmPlan, ordered: Vec<CandidateFile>, config: &SelectionConfig) {
    let mut stopped: Option<SkipReason> = None;

    for file in ordered {
        if stopped.is_none() {
            stopped = exceeded_bound(plan, &file, config);
        }
        match &stopped {
            Some(reason) => plan.skip(SkippedFile {
                path: file.path,
                category: file.category,
                size_bytes: Some(file.size_bytes),
                reason: reason.clone(),
            }),
            None => {
                plan.push(file);
            }
        }
    }
}

fn exceeded_bound(plan: &WarmPlan, next: &CandidateFile, config: &SelectionConfig) -> Option<SkipReason> {
    if let Some(max_files) = config.max_files {
        if plan.file_count() as u64 >= max_files {
            return Some(SkipReason::FileBound);
        }
    }
    if let Some(max_bytes) = config.max_total_bytes {
        if plan.total_bytes().saturating_add(next.size_bytes) > max_bytes {
            return Some(SkipReason::ByteBound);
        }
    }
    None
}
