//! Instance domain types
//!
//! An [`Instance`] is one game installation managed by a supported launcher.
//! Instances are produced by discovery and never mutated afterwards.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Launcher ecosystem that owns an instance.
///
/// The declaration order is the listing order: CurseForge instances are
/// always reported before Prism instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LauncherKind {
    CurseForge,
    Prism,
}

impl LauncherKind {
    /// All supported kinds in listing order
    pub const ALL: [LauncherKind; 2] = [LauncherKind::CurseForge, LauncherKind::Prism];

    /// Human-readable launcher name
    pub fn display_name(self) -> &'static str {
        match self {
            LauncherKind::CurseForge => "CurseForge",
            LauncherKind::Prism => "PrismLauncher",
        }
    }
}

impl fmt::Display for LauncherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LauncherKind::CurseForge => write!(f, "curseforge"),
            LauncherKind::Prism => write!(f, "prism"),
        }
    }
}

impl FromStr for LauncherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "curseforge" | "cf" | "twitch" => Ok(LauncherKind::CurseForge),
            "prism" | "prismlauncher" | "multimc" => Ok(LauncherKind::Prism),
            other => Err(format!(
                "unknown launcher kind '{other}' (expected curseforge or prism)"
            )),
        }
    }
}

/// A discovered game installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instance {
    /// Display name from the launcher manifest, or the directory name
    pub name: String,

    /// Canonical absolute path of the instance directory
    pub root_path: PathBuf,

    /// Launcher that manages this instance
    pub kind: LauncherKind,

    /// Directory holding `mods/`, `config/` and friends.
    /// Equal to `root_path` for CurseForge, `<root>/.minecraft` for Prism.
    pub game_dir: PathBuf,
}

impl Instance {
    pub fn new(
        name: impl Into<String>,
        root_path: impl Into<PathBuf>,
        kind: LauncherKind,
        game_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            root_path: root_path.into(),
            kind,
            game_dir: game_dir.into(),
        }
    }

    /// Name of the instance folder, which is what launchers accept as an id
    pub fn folder_name(&self) -> String {
        self.root_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }

    /// Whether `path` lies lexically inside this instance's root
    pub fn contains(&self, path: &Path) -> bool {
        path.starts_with(&self.root_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_order_curseforge_first() {
        assert!(LauncherKind::CurseForge < LauncherKind::Prism);
        assert_eq!(LauncherKind::ALL[0], LauncherKind::CurseForge);
    }

    #[test]
    fn test_kind_from_str_aliases() {
        assert_eq!("CurseForge".parse(), Ok(LauncherKind::CurseForge));
        assert_eq!("multimc".parse(), Ok(LauncherKind::Prism));
        assert!("atlauncher".parse::<LauncherKind>().is_err());
    }

    #[test]
    fn test_kind_display_roundtrips_through_from_str() {
        for kind in LauncherKind::ALL {
            assert_eq!(kind.to_string().parse::<LauncherKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_instance_contains() {
        let instance = Instance::new("Pack", "/games/pack", LauncherKind::Prism, "/games/pack/.minecraft");
        assert!(instance.contains(Path::new("/games/pack/.minecraft/mods/a.jar")));
        assert!(!instance.contains(Path::new("/games/packs/other.jar")));
        assert_eq!(instance.folder_name(), "pack");
    }
}
