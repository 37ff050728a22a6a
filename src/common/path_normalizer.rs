//! Path normalization helpers
//!
//! Canonical paths are used as identity for roots, instances and planned files,
//! so aliases through symlinks (or `/var -> /private/var` on macOS) collapse.

use normpath::PathExt;
use std::path::{Path, PathBuf};

/// Resolve `path` to its canonical form (symlinks resolved, no verbatim prefix on Windows)
pub fn canonicalize(path: &Path) -> std::io::Result<PathBuf> {
    path.normalize().map(normpath::BasePathBuf::into_path_buf)
}

/// Path of `path` relative to `base`, with forward slashes.
/// Returns `None` when `path` is not under `base`.
pub fn relative_forward_slashes(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    Some(relative.to_string_lossy().replace('\\', "/"))
}
