//! Candidate file types produced by selection

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What a file is used for. Declaration order is warming priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ModArchive,
    Asset,
    Config,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::ModArchive, Category::Asset, Category::Config];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::ModArchive => write!(f, "mod-archive"),
            Category::Asset => write!(f, "asset"),
            Category::Config => write!(f, "config"),
        }
    }
}

/// A single file selected for warming
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    /// Absolute path, always inside the owning instance root
    pub path: PathBuf,

    /// Size when the plan was built
    pub size_bytes: u64,

    pub category: Category,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>, size_bytes: u64, category: Category) -> Self {
        Self {
            path: path.into(),
            size_bytes,
            category,
        }
    }
}
