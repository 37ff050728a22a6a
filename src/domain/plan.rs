//! Warm plan domain types
//!
//! A [`WarmPlan`] is the ordered list of files one warm run will read, plus the
//! candidates that were left out and why. Plans are built right before a run
//! and consumed by it.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::{CandidateFile, Category, Instance};

/// Why a candidate file did not make it into the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum SkipReason {
    /// Adding the file would exceed `max_total_bytes`
    ByteBound,
    /// The plan already holds `max_files` files
    FileBound,
    /// Stat failed between enumeration and planning
    Unreadable { error: String },
    /// Symlink resolving outside the instance root
    OutsideInstance { target: PathBuf },
    /// Matched a user exclude pattern
    Excluded { pattern: String },
    /// Same file already planned through another path
    Duplicate { of: PathBuf },
}

impl SkipReason {
    /// Whether the skip is caused by a configured bound (plan truncation)
    pub fn is_bound(&self) -> bool {
        matches!(self, SkipReason::ByteBound | SkipReason::FileBound)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ByteBound => write!(f, "byte limit reached"),
            SkipReason::FileBound => write!(f, "file limit reached"),
            SkipReason::Unreadable { error } => write!(f, "unreadable: {error}"),
            SkipReason::OutsideInstance { target } => {
                write!(f, "links outside instance: {}", target.display())
            }
            SkipReason::Excluded { pattern } => write!(f, "excluded by '{pattern}'"),
            SkipReason::Duplicate { of } => write!(f, "duplicate of {}", of.display()),
        }
    }
}

/// A candidate left out of the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub category: Category,
    /// Unknown when the file could not be stat'ed
    pub size_bytes: Option<u64>,
    pub reason: SkipReason,
}

/// Ordered files to warm for one instance
#[derive(Debug, Clone, Serialize)]
pub struct WarmPlan {
    instance: Instance,
    files: Vec<CandidateFile>,
    skipped: Vec<SkippedFile>,
    total_bytes: u64,
}

impl WarmPlan {
    /// Start an empty plan for `instance`
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            files: Vec::new(),
            skipped: Vec::new(),
            total_bytes: 0,
        }
    }

    /// Append a file in priority order.
    ///
    /// Files outside the instance root are refused and recorded as skipped,
    /// so a plan can never reference anything outside its instance.
    pub fn push(&mut self, file: CandidateFile) -> bool {
        if !self.instance.contains(&file.path) {
            let target = file.path.clone();
            self.skip(SkippedFile {
                path: file.path,
                category: file.category,
                size_bytes: Some(file.size_bytes),
                reason: SkipReason::OutsideInstance { target },
            });
            return false;
        }
        self.total_bytes += file.size_bytes;
        self.files.push(file);
        true
    }

    /// Record a candidate that was left out
    pub fn skip(&mut self, skipped: SkippedFile) {
        self.skipped.push(skipped);
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn files(&self) -> &[CandidateFile] {
        &self.files
    }

    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether any candidate was dropped because of a bound
    pub fn is_truncated(&self) -> bool {
        self.skipped.iter().any(|s| s.reason.is_bound())
    }

    /// Planned file count per category, in priority order
    pub fn counts_by_category(&self) -> Vec<(Category, usize, u64)> {
        Category::ALL
            .iter()
            .map(|category| {
                let (count, bytes) = self
                    .files
                    .iter()
                    .filter(|f| f.category == *category)
                    .fold((0, 0), |(n, b), f| (n + 1, b + f.size_bytes));
                (*category, count, bytes)
            })
            .collect()
    }
}
