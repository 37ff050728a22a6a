//! Display names and game directories from launcher metadata

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::classify::{CURSEFORGE_MANIFEST, PRISM_CONFIG, PRISM_GAME_DIRS};
use crate::domain::LauncherKind;

#[derive(Debug, Deserialize)]
struct CurseForgeManifest {
    name: Option<String>,
}

/// Name recorded by the launcher, falling back to the folder name
pub fn instance_name(root: &Path, kind: LauncherKind) -> String {
    let recorded = match kind {
        LauncherKind::CurseForge => curseforge_name(&root.join(CURSEFORGE_MANIFEST)),
        LauncherKind::Prism => prism_name(&root.join(PRISM_CONFIG)),
    };

    recorded.unwrap_or_else(|| {
        root.file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string())
    })
}

/// Directory holding the game files for an instance
pub fn game_dir(root: &Path, kind: LauncherKind) -> PathBuf {
    match kind {
        LauncherKind::CurseForge => root.to_path_buf(),
        LauncherKind::Prism => PRISM_GAME_DIRS
            .iter()
            .map(|d| root.join(d))
            .find(|p| p.is_dir())
            .unwrap_or_else(|| root.to_path_buf()),
    }
}

fn curseforge_name(manifest: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(manifest)
        .inspect_err(|e| debug!(path = %manifest.display(), error = %e, "manifest unreadable"))
        .ok()?;
    let parsed: CurseForgeManifest = serde_json::from_str(&raw)
        .inspect_err(|e| debug!(path = %manifest.display(), error = %e, "manifest not valid JSON"))
        .ok()?;
    parsed.name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

fn prism_name(config: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(config).ok()?;
    parse_cfg_name(&raw)
}

/// Value of the `name=` key in an `instance.cfg`.
///
/// Prism quotes values containing commas (`name="Foo, Bar"`).
fn parse_cfg_name(raw: &str) -> Option<String> {
    raw.lines()
        .filter_map(|line| line.trim().strip_prefix("name="))
        .map(|value| unquote(value.trim()).trim())
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}
