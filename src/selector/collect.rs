//! Candidate enumeration below an instance's game directory

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};
use wax::{CandidatePath, Glob, Pattern};

use crate::common::{canonicalize, relative_forward_slashes};
use crate::config::{CategoryRule, SelectionConfig};
use crate::domain::{CandidateFile, Category, SkipReason, SkippedFile};
use crate::error::{Result, config_invalid};

/// Compiled exclude patterns, kept next to their source text for skip reasons
pub(super) struct Excludes<'a> {
    patterns: Vec<(&'a str, Glob<'a>)>,
}

impl<'a> Excludes<'a> {
    pub(super) fn compile(patterns: &'a [String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                Glob::new(p)
                    .map(|glob| (p.as_str(), glob))
                    .map_err(|e| config_invalid(format!("invalid exclude pattern '{p}': {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// First pattern matching `relative` (forward slashes), if any
    pub(super) fn matching(&self, relative: &str) -> Option<&'a str> {
        let candidate = CandidatePath::from(relative);
        self.patterns
            .iter()
            .find(|(_, glob)| glob.matched(&candidate).is_some())
            .map(|(source, _)| *source)
    }
}

/// Everything found for one category, before ordering and bounds
#[derive(Default)]
pub(super) struct Collected {
    pub files: Vec<CandidateFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Walks rule directories for one instance.
///
/// Shared across categories so a file reachable through two rules is only
/// planned once, under the higher priority category.
pub(super) struct Collector<'a> {
    game_dir: &'a Path,
    /// Canonical instance root used by the symlink escape guard
    root: &'a Path,
    config: &'a SelectionConfig,
    excludes: &'a Excludes<'a>,
    /// Canonical path -> path it was first planned under
    seen: HashMap<PathBuf, PathBuf>,
}

impl<'a> Collector<'a> {
    pub(super) fn new(
        game_dir: &'a Path,
        root: &'a Path,
        config: &'a SelectionConfig,
        excludes: &'a Excludes<'a>,
    ) -> Self {
        Self {
            game_dir,
            root,
            config,
            excludes,
            seen: HashMap::new(),
        }
    }

    pub(super) fn collect(&mut self, category: Category) -> Collected {
        let mut out = Collected::default();
        let config = self.config;
        let rules: Vec<&CategoryRule> = config.rules_for(category).collect();

        for rule in rules {
            for dir in &rule.dirs {
                let dir_path = self.game_dir.join(dir);
                if !dir_path.is_dir() {
                    continue;
                }
                for path in self.walk(&dir_path, rule) {
                    self.consider(path, category, &mut out);
                }
            }
            for file in &rule.files {
                let path = self.game_dir.join(file);
                if path.symlink_metadata().is_ok() {
                    self.consider(path, category, &mut out);
                }
            }
        }

        out
    }

    /// Files under `dir` whose extension matches `rule`, without following links
    fn walk(&self, dir: &Path, rule: &CategoryRule) -> Vec<PathBuf> {
        let skip_dirs = &self.config.skip_dirs;
        let descend = |entry: &DirEntry| {
            entry.depth() == 0
                || !entry.file_type().is_dir()
                || !skip_dirs
                    .iter()
                    .any(|s| entry.file_name().to_string_lossy() == s.as_str())
        };

        WalkDir::new(dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(descend)
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(
                        path = %e.path().unwrap_or(dir).display(),
                        error = %e,
                        "skipping unreadable entry"
                    );
                    None
                }
            })
            .filter(|e| e.file_type().is_file() || e.path_is_symlink())
            .filter(|e| rule.matches_extension(&e.file_name().to_string_lossy()))
            .map(DirEntry::into_path)
            .collect()
    }

    fn consider(&mut self, path: PathBuf, category: Category, out: &mut Collected) {
        let skip = |out: &mut Collected, path: PathBuf, size_bytes, reason| {
            out.skipped.push(SkippedFile {
                path,
                category,
                size_bytes,
                reason,
            });
        };

        let canonical = match canonicalize(&path) {
            Ok(canonical) => canonical,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "cannot resolve candidate");
                skip(out, path, None, SkipReason::Unreadable { error: e.to_string() });
                return;
            }
        };

        if !canonical.starts_with(self.root) && !self.config.follow_symlinks_outside_root {
            warn!(
                path = %path.display(),
                target = %canonical.display(),
                "excluding link that points outside the instance"
            );
            skip(out, path, None, SkipReason::OutsideInstance { target: canonical });
            return;
        }

        let metadata = match std::fs::metadata(&canonical) {
            Ok(metadata) => metadata,
            Err(e) => {
                skip(out, path, None, SkipReason::Unreadable { error: e.to_string() });
                return;
            }
        };
        if !metadata.is_file() {
            // Link to a directory or a device; never a warm candidate
            return;
        }
        let size = metadata.len();

        if let Some(relative) = relative_forward_slashes(self.game_dir, &path) {
            if let Some(pattern) = self.excludes.matching(&relative) {
                debug!(path = %relative, pattern, "excluded");
                skip(
                    out,
                    path,
                    Some(size),
                    SkipReason::Excluded {
                        pattern: pattern.to_string(),
                    },
                );
                return;
            }
        }

        if let Some(first) = self.seen.get(&canonical) {
            let of = first.clone();
            skip(out, path, Some(size), SkipReason::Duplicate { of });
            return;
        }
        self.seen.insert(canonical, path.clone());

        out.files.push(CandidateFile::new(path, size, category));
    }
}
