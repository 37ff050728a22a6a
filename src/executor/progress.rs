//! Progress events and the reporter interface

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Category;

/// What happened to the file an event is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressKind {
    /// Dry run: the file would have been read
    WouldRead,
    Read,
    Skipped,
    Failed,
}

/// One completed file, with running totals.
///
/// Events reach the reporter in strictly increasing `seq` order, and
/// `files_done` / `bytes_done` never decrease from one event to the next,
/// whatever the worker count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    /// 1-based sequence number
    pub seq: u64,
    pub files_done: u64,
    pub files_total: u64,
    pub bytes_done: u64,
    pub bytes_total: u64,
    pub current_path: PathBuf,
    pub category: Category,
    pub kind: ProgressKind,
    pub message: String,
}

/// Receives executor progress.
///
/// Both methods are called on the thread that invoked the executor, never
/// from worker threads.
pub trait ProgressReporter {
    fn on_event(&self, event: &ProgressEvent);

    /// Free-form log lines (run start, failures, summary)
    fn on_log(&self, _message: &str) {}
}

impl<F> ProgressReporter for F
where
    F: Fn(&ProgressEvent),
{
    fn on_event(&self, event: &ProgressEvent) {
        self(event);
    }
}

/// Reporter that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_event(&self, _event: &ProgressEvent) {}
}
