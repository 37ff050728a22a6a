//! Warm execution
//!
//! [`WarmExecutor`] reads every file of a [`WarmPlan`] (or pretends to, in a
//! dry run) and produces a [`WarmResult`]. Per-file failures are recorded and
//! the run continues; only an empty plan or invalid options fail the call.
//!
//! With one job, files are read inline on the calling thread. With more,
//! scoped worker threads pull file indices from a shared cursor and send
//! outcomes back over a channel. The calling thread is the only one that
//! touches the running totals or the reporter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use crossbeam::channel;
use tracing::{debug, info, warn};

use crate::common::format_size;
use crate::config::ExecutionConfig;
use crate::domain::{
    CandidateFile, FileOutcome, FileReport, RunState, WarmMode, WarmPlan, WarmResult,
};
use crate::error::{Result, config_invalid, empty_plan};

pub mod cancel;
pub mod progress;
mod read;

pub use cancel::CancellationToken;
pub use progress::{NoopReporter, ProgressEvent, ProgressKind, ProgressReporter};

use read::warm_file;

/// How to run a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteOptions {
    pub mode: WarmMode,
    /// Worker count, 1 for strictly sequential reads
    pub jobs: usize,
    /// Discard buffer size per worker
    pub chunk_size: usize,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self::from(&ExecutionConfig::default())
    }
}

impl From<&ExecutionConfig> for ExecuteOptions {
    fn from(config: &ExecutionConfig) -> Self {
        Self {
            mode: config.mode(),
            jobs: config.jobs,
            chunk_size: config.chunk_size,
        }
    }
}

/// Runs plans and tracks the lifecycle of the latest run
#[derive(Debug)]
pub struct WarmExecutor {
    state: RunState,
}

impl Default for WarmExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl WarmExecutor {
    pub fn new() -> Self {
        Self {
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Execute `plan`.
    ///
    /// Returns `Err` without touching any file when the plan is empty or the
    /// options are invalid; the executor is then in `Failed`. Otherwise the
    /// run ends `Completed`, or `Cancelled` when `cancel` stopped it before
    /// every file was attempted.
    pub fn execute(
        &mut self,
        plan: &WarmPlan,
        options: &ExecuteOptions,
        cancel: &CancellationToken,
        reporter: &dyn ProgressReporter,
    ) -> Result<WarmResult> {
        let name = &plan.instance().name;

        if plan.is_empty() {
            self.state = RunState::Failed;
            return Err(empty_plan(name.clone()));
        }
        if options.jobs == 0 || options.chunk_size == 0 {
            self.state = RunState::Failed;
            return Err(config_invalid("jobs and chunk_size must be greater than zero"));
        }

        self.state = RunState::Running;
        let started = Instant::now();
        let files = plan.files();
        let jobs = options.jobs.min(files.len());

        info!(
            instance = %name,
            files = files.len(),
            bytes = plan.total_bytes(),
            jobs,
            mode = ?options.mode,
            "warm run started"
        );
        reporter.on_log(&format!(
            "{} {} file(s), {} for {}",
            match options.mode {
                WarmMode::DryRun => "Planning",
                WarmMode::Real => "Warming",
            },
            files.len(),
            format_size(plan.total_bytes()),
            name
        ));

        let mut aggregator = Aggregator::new(plan, options.mode, reporter);
        if jobs == 1 {
            run_inline(files, options, cancel, &mut aggregator);
        } else {
            run_pooled(files, options, jobs, cancel, &mut aggregator);
        }

        let result = aggregator.finish(started);
        self.state = result.state;

        info!(
            instance = %name,
            state = ?result.state,
            bytes = result.bytes_read,
            succeeded = result.files_succeeded,
            failed = result.files_failed(),
            "warm run finished"
        );

        Ok(result)
    }
}

/// Run `plan` with a fresh executor
pub fn execute(
    plan: &WarmPlan,
    options: &ExecuteOptions,
    cancel: &CancellationToken,
    reporter: &dyn ProgressReporter,
) -> Result<WarmResult> {
    WarmExecutor::new().execute(plan, options, cancel, reporter)
}

fn run_inline(
    files: &[CandidateFile],
    options: &ExecuteOptions,
    cancel: &CancellationToken,
    aggregator: &mut Aggregator<'_>,
) {
    let mut buf = vec![0u8; options.chunk_size];
    for (index, file) in files.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!(remaining = files.len() - index, "cancelled");
            break;
        }
        let outcome = warm_file(file, options.mode, &mut buf);
        aggregator.record(index, outcome);
    }
}

fn run_pooled(
    files: &[CandidateFile],
    options: &ExecuteOptions,
    jobs: usize,
    cancel: &CancellationToken,
    aggregator: &mut Aggregator<'_>,
) {
    let cursor = AtomicUsize::new(0);
    let (tx, rx) = channel::unbounded::<(usize, FileOutcome)>();

    std::thread::scope(|scope| {
        for _ in 0..jobs {
            let tx = tx.clone();
            let cursor = &cursor;
            scope.spawn(move || {
                let mut buf = vec![0u8; options.chunk_size];
                while !cancel.is_cancelled() {
                    let index = cursor.fetch_add(1, Ordering::SeqCst);
                    let Some(file) = files.get(index) else {
                        break;
                    };
                    let outcome = warm_file(file, options.mode, &mut buf);
                    if tx.send((index, outcome)).is_err() {
                        break;
                    }
                }
            });
        }
        // Workers hold the remaining senders; the loop ends when they all exit
        drop(tx);

        for (index, outcome) in rx {
            aggregator.record(index, outcome);
        }
    });
}

/// Single consumer of file outcomes: owns the counters and talks to the reporter
struct Aggregator<'a> {
    plan: &'a WarmPlan,
    mode: WarmMode,
    reporter: &'a dyn ProgressReporter,
    outcomes: Vec<FileOutcome>,
    seq: u64,
    files_done: u64,
    files_succeeded: u64,
    bytes_done: u64,
}

impl<'a> Aggregator<'a> {
    fn new(plan: &'a WarmPlan, mode: WarmMode, reporter: &'a dyn ProgressReporter) -> Self {
        Self {
            plan,
            mode,
            reporter,
            outcomes: vec![FileOutcome::NotAttempted; plan.file_count()],
            seq: 0,
            files_done: 0,
            files_succeeded: 0,
            bytes_done: 0,
        }
    }

    fn record(&mut self, index: usize, outcome: FileOutcome) {
        let plan = self.plan;
        let file = &plan.files()[index];
        self.seq += 1;
        self.files_done += 1;

        let (kind, message) = match &outcome {
            FileOutcome::Succeeded { bytes_read } => {
                self.files_succeeded += 1;
                self.bytes_done += bytes_read;
                match self.mode {
                    WarmMode::DryRun => (
                        ProgressKind::WouldRead,
                        format!("would read {} ({})", file.path.display(), format_size(*bytes_read)),
                    ),
                    WarmMode::Real => (
                        ProgressKind::Read,
                        format!("read {} ({})", file.path.display(), format_size(*bytes_read)),
                    ),
                }
            }
            FileOutcome::Skipped { reason } => (
                ProgressKind::Skipped,
                format!("skipped {}: {reason}", file.path.display()),
            ),
            FileOutcome::Failed { error } => {
                warn!(path = %file.path.display(), %error, "read failed");
                (
                    ProgressKind::Failed,
                    format!("failed {}: {error}", file.path.display()),
                )
            }
            FileOutcome::NotAttempted => return,
        };

        if kind == ProgressKind::Failed {
            self.reporter.on_log(&message);
        }
        self.reporter.on_event(&ProgressEvent {
            seq: self.seq,
            files_done: self.files_done,
            files_total: plan.file_count() as u64,
            bytes_done: self.bytes_done,
            bytes_total: plan.total_bytes(),
            current_path: file.path.clone(),
            category: file.category,
            kind,
            message,
        });

        self.outcomes[index] = outcome;
    }

    fn finish(self, started: Instant) -> WarmResult {
        let state = if self.outcomes.iter().all(FileOutcome::is_attempted) {
            RunState::Completed
        } else {
            RunState::Cancelled
        };

        let files = self
            .plan
            .files()
            .iter()
            .zip(self.outcomes)
            .map(|(file, outcome)| FileReport {
                path: file.path.clone(),
                category: file.category,
                size_bytes: file.size_bytes,
                outcome,
            })
            .collect();

        WarmResult {
            instance_name: self.plan.instance().name.clone(),
            mode: self.mode,
            state,
            files,
            bytes_read: self.bytes_done,
            files_attempted: self.files_done,
            files_succeeded: self.files_succeeded,
            elapsed: started.elapsed(),
        }
    }
}
