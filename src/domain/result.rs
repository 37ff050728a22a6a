//! Warm run results

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;

use super::Category;
use crate::common::format_size;

/// Whether files are actually read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarmMode {
    /// Report what would be read without touching file contents
    DryRun,
    #[default]
    Real,
}

/// Executor lifecycle: `Idle -> Running -> {Completed, Cancelled, Failed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Cancelled,
    Failed,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RunState::Completed | RunState::Cancelled | RunState::Failed
        )
    }
}

/// What happened to one planned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum FileOutcome {
    Succeeded { bytes_read: u64 },
    Skipped { reason: String },
    Failed { error: String },
    NotAttempted,
}

impl FileOutcome {
    /// Succeeded, skipped and failed files count as attempted
    pub fn is_attempted(&self) -> bool {
        !matches!(self, FileOutcome::NotAttempted)
    }
}

/// Per-file entry of a [`WarmResult`], in plan order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub category: Category,
    pub size_bytes: u64,
    pub outcome: FileOutcome,
}

/// Immutable summary of one executor run
#[derive(Debug, Clone, Serialize)]
pub struct WarmResult {
    pub instance_name: String,
    pub mode: WarmMode,
    /// `Completed` or `Cancelled`
    pub state: RunState,
    pub files: Vec<FileReport>,
    /// Bytes read, or bytes that would be read in dry-run mode
    pub bytes_read: u64,
    pub files_attempted: u64,
    pub files_succeeded: u64,
    pub elapsed: Duration,
}

impl WarmResult {
    pub fn files_failed(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Failed { .. }))
    }

    pub fn files_skipped(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::Skipped { .. }))
    }

    pub fn files_not_attempted(&self) -> usize {
        self.count(|o| matches!(o, FileOutcome::NotAttempted))
    }

    /// Failed files with their error text
    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.files.iter().filter_map(|f| match &f.outcome {
            FileOutcome::Failed { error } => Some((&f.path, error.as_str())),
            _ => None,
        })
    }

    /// One-line human summary
    pub fn summary(&self) -> String {
        let verb = match self.mode {
            WarmMode::DryRun => "would warm",
            WarmMode::Real => "warmed",
        };
        let mut line = format!(
            "{}: {} {} in {} file(s) in {:.1}s",
            self.instance_name,
            verb,
            format_size(self.bytes_read),
            self.files_succeeded,
            self.elapsed.as_secs_f64()
        );
        let failed = self.files_failed();
        if failed > 0 {
            line.push_str(&format!(", {failed} failed"));
        }
        let skipped = self.files_skipped();
        if skipped > 0 {
            line.push_str(&format!(", {skipped} skipped"));
        }
        if self.state == RunState::Cancelled {
            line.push_str(&format!(
                ", cancelled with {} not attempted",
                self.files_not_attempted()
            ));
        }
        line
    }

    fn count(&self, pred: impl Fn(&FileOutcome) -> bool) -> usize {
        self.files.iter().filter(|f| pred(&f.outcome)).count()
    }
}
