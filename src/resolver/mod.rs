//! Launcher root resolution
//!
//! Each supported operating system has its own [`PathResolver`] listing the
//! places CurseForge and Prism keep their instances. [`resolver_for`] picks
//! the variant once from an [`OsIdentity`]; nothing downstream branches on
//! the platform again.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::common::canonicalize;
use crate::domain::LauncherKind;

pub mod os;

pub use os::{HostDirs, OsIdentity};

/// A directory expected to contain instances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherRoot {
    /// Launcher owning the root, `None` for user-supplied roots (searched for every kind)
    pub kind: Option<LauncherKind>,
    pub path: PathBuf,
}

impl LauncherRoot {
    pub fn new(kind: LauncherKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind: Some(kind),
            path: path.into(),
        }
    }

    /// A root of unknown kind, e.g. passed with `--root`
    pub fn custom(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: None,
            path: path.into(),
        }
    }

    /// Whether instances of `kind` may live under this root
    pub fn accepts(&self, kind: LauncherKind) -> bool {
        self.kind.is_none_or(|k| k == kind)
    }
}

/// Platform-specific knowledge of default launcher locations
pub trait PathResolver {
    /// Every plausible root, existing or not
    fn candidate_roots(&self, dirs: &HostDirs) -> Vec<LauncherRoot>;
}

struct WindowsResolver;
struct MacResolver;
struct LinuxResolver;

fn curseforge_instances(base: &Path) -> PathBuf {
    base.join("CurseForge").join("Minecraft").join("Instances")
}

impl PathResolver for WindowsResolver {
    fn candidate_roots(&self, dirs: &HostDirs) -> Vec<LauncherRoot> {
        vec![
            LauncherRoot::new(LauncherKind::CurseForge, curseforge_instances(&dirs.documents)),
            LauncherRoot::new(LauncherKind::CurseForge, curseforge_instances(&dirs.home)),
            // Legacy Twitch app location
            LauncherRoot::new(
                LauncherKind::CurseForge,
                dirs.home.join("Twitch").join("Minecraft").join("Instances"),
            ),
            LauncherRoot::new(
                LauncherKind::Prism,
                dirs.data.join("PrismLauncher").join("instances"),
            ),
            LauncherRoot::new(LauncherKind::Prism, dirs.data.join("MultiMC").join("instances")),
        ]
    }
}

impl PathResolver for MacResolver {
    fn candidate_roots(&self, dirs: &HostDirs) -> Vec<LauncherRoot> {
        vec![
            LauncherRoot::new(LauncherKind::CurseForge, curseforge_instances(&dirs.data)),
            LauncherRoot::new(LauncherKind::CurseForge, curseforge_instances(&dirs.documents)),
            LauncherRoot::new(
                LauncherKind::Prism,
                dirs.data.join("PrismLauncher").join("instances"),
            ),
            LauncherRoot::new(LauncherKind::Prism, dirs.data.join("MultiMC").join("instances")),
        ]
    }
}

impl PathResolver for LinuxResolver {
    fn candidate_roots(&self, dirs: &HostDirs) -> Vec<LauncherRoot> {
        vec![
            LauncherRoot::new(LauncherKind::CurseForge, curseforge_instances(&dirs.documents)),
            LauncherRoot::new(
                LauncherKind::CurseForge,
                dirs.home.join("curseforge").join("minecraft").join("Instances"),
            ),
            LauncherRoot::new(
                LauncherKind::Prism,
                dirs.data.join("PrismLauncher").join("instances"),
            ),
            LauncherRoot::new(LauncherKind::Prism, dirs.data.join("MultiMC").join("instances")),
            LauncherRoot::new(
                LauncherKind::Prism,
                dirs.home.join("PrismLauncher").join("instances"),
            ),
            LauncherRoot::new(LauncherKind::Prism, dirs.home.join("MultiMC").join("instances")),
            // Flatpak sandbox
            LauncherRoot::new(
                LauncherKind::Prism,
                dirs.home
                    .join(".var/app/org.prismlauncher.PrismLauncher/data/PrismLauncher/instances"),
            ),
        ]
    }
}

/// Select the resolver variant for `os`
pub fn resolver_for(os: OsIdentity) -> &'static dyn PathResolver {
    match os {
        OsIdentity::Windows => &WindowsResolver,
        OsIdentity::MacOs => &MacResolver,
        OsIdentity::Linux => &LinuxResolver,
    }
}

/// Existing launcher roots for `os`, canonicalized and deduplicated.
///
/// Missing directories are dropped silently; when two candidates resolve to
/// the same directory the first one wins.
pub fn resolve_roots(os: OsIdentity, dirs: &HostDirs) -> Vec<LauncherRoot> {
    existing_roots(resolver_for(os).candidate_roots(dirs))
}

/// Keep the roots that exist as directories, canonicalized, first occurrence wins
pub fn existing_roots(candidates: Vec<LauncherRoot>) -> Vec<LauncherRoot> {
    let mut seen = HashSet::new();
    let mut roots = Vec::new();

    for candidate in candidates {
        if !candidate.path.is_dir() {
            debug!(path = %candidate.path.display(), "launcher root absent");
            continue;
        }
        let Ok(path) = canonicalize(&candidate.path) else {
            debug!(path = %candidate.path.display(), "launcher root not resolvable");
            continue;
        };
        if seen.insert(path.clone()) {
            roots.push(LauncherRoot {
                kind: candidate.kind,
                path,
            });
        }
    }

    roots
}
