//! Instance discovery
//!
//! Scans launcher roots for instance directories. A directory counts as an
//! instance only when [`classify`] recognises its marker files; everything
//! else is skipped without error. Unreadable directories are logged and
//! skipped, they never abort a scan.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::common::canonicalize;
use crate::domain::{Instance, LauncherKind};
use crate::resolver::LauncherRoot;

pub mod classify;
pub mod manifest;

pub use classify::{Classification, DirListing, classify};

/// Find instances under `roots`, restricted to `kinds`.
///
/// Each root is checked itself, then its subdirectories, then one more
/// level below subdirectories that are not instances (launcher groups or
/// loosely nested folders). Results are deduplicated by canonical path and
/// ordered by kind (CurseForge first), then name, then path.
pub fn discover(roots: &[LauncherRoot], kinds: &[LauncherKind]) -> Vec<Instance> {
    let mut scan = Scan {
        kinds,
        seen: HashSet::new(),
        found: Vec::new(),
    };

    for root in roots {
        scan.root(root);
    }

    let mut instances = scan.found;
    sort_instances(&mut instances);
    instances
}

/// Classify a single directory the user pointed at directly
pub fn instance_at(path: &Path) -> Option<Instance> {
    let listing = DirListing::read(path)
        .inspect_err(|e| debug!(path = %path.display(), error = %e, "cannot list directory"))
        .ok()?;
    let kind = classify(&listing).kind()?;
    let root = canonicalize(path).ok()?;
    Some(build_instance(root, kind))
}

/// Stable listing order: kind, then case-insensitive name, then path
pub fn sort_instances(instances: &mut [Instance]) {
    instances.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.root_path.cmp(&b.root_path))
    });
}

/// What [`Scan::visit`] found at a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    /// Instance directory, recorded or filtered out; never descended
    Instance,
    /// Readable, not an instance; its subdirectories may hold instances
    Descend,
    /// Listing failed and was already logged
    Unreadable,
}

struct Scan<'a> {
    kinds: &'a [LauncherKind],
    seen: HashSet<PathBuf>,
    found: Vec<Instance>,
}

impl Scan<'_> {
    fn root(&mut self, root: &LauncherRoot) {
        debug!(path = %root.path.display(), kind = ?root.kind, "scanning root");

        if self.visit(root, &root.path) != Visit::Descend {
            return;
        }

        for child in subdirectories(&root.path) {
            if self.visit(root, &child) != Visit::Descend {
                continue;
            }
            for grandchild in subdirectories(&child) {
                self.visit(root, &grandchild);
            }
        }
    }

    /// Classify `path` and record it when it is a requested instance
    fn visit(&mut self, root: &LauncherRoot, path: &Path) -> Visit {
        let listing = match DirListing::read(path) {
            Ok(listing) => listing,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable directory");
                return Visit::Unreadable;
            }
        };

        let Some(kind) = classify(&listing).kind() else {
            debug!(path = %path.display(), "no instance markers");
            return Visit::Descend;
        };

        if !root.accepts(kind) || !self.kinds.contains(&kind) {
            debug!(path = %path.display(), %kind, "instance kind not requested");
            return Visit::Instance;
        }

        let canonical = match canonicalize(path) {
            Ok(p) => p,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot resolve instance path");
                return Visit::Instance;
            }
        };

        if self.seen.insert(canonical.clone()) {
            self.found.push(build_instance(canonical, kind));
        } else {
            debug!(path = %path.display(), "duplicate instance path");
        }
        Visit::Instance
    }
}

fn build_instance(root: PathBuf, kind: LauncherKind) -> Instance {
    let name = manifest::instance_name(&root, kind);
    let game_dir = manifest::game_dir(&root, kind);
    Instance::new(name, root, kind, game_dir)
}

/// Immediate subdirectories of `path`, sorted. Errors are logged and yield nothing.
fn subdirectories(path: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "skipping unreadable directory");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    dirs
}
