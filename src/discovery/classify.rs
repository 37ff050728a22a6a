//! Marker-file classification of instance directories
//!
//! [`classify`] is a pure function over a [`DirListing`], so the rules can be
//! tested without building directory trees.

use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::LauncherKind;

/// Manifest CurseForge writes into every instance
pub const CURSEFORGE_MANIFEST: &str = "minecraftinstance.json";

/// Per-instance settings file of Prism and MultiMC
pub const PRISM_CONFIG: &str = "instance.cfg";

/// Component list of Prism and MultiMC
pub const PRISM_PACK: &str = "mmc-pack.json";

/// Game directory names used by Prism, preferred first
pub const PRISM_GAME_DIRS: [&str; 2] = [".minecraft", "minecraft"];

/// Outcome of classifying one directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    CurseForge,
    Prism,
    Unknown,
}

impl Classification {
    pub fn kind(self) -> Option<LauncherKind> {
        match self {
            Classification::CurseForge => Some(LauncherKind::CurseForge),
            Classification::Prism => Some(LauncherKind::Prism),
            Classification::Unknown => None,
        }
    }
}

/// Names of the entries directly inside a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    pub files: BTreeSet<String>,
    pub dirs: BTreeSet<String>,
}

impl DirListing {
    pub fn from_names<F, D>(files: F, dirs: D) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// List `path`. Entries whose type cannot be determined are ignored.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let mut listing = Self::default();
        for entry in std::fs::read_dir(path)? {
            let Ok(entry) = entry else { continue };
            let name = entry.file_name().to_string_lossy().to_string();
            // Follows symlinks so a linked `.minecraft` still counts
            let entry_path = entry.path();
            if entry_path.is_dir() {
                listing.dirs.insert(name);
            } else if entry_path.is_file() {
                listing.files.insert(name);
            }
        }
        Ok(listing)
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    pub fn has_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }
}

/// Decide which launcher, if any, owns a directory with these contents
pub fn classify(listing: &DirListing) -> Classification {
    if listing.has_file(CURSEFORGE_MANIFEST) {
        return Classification::CurseForge;
    }

    let has_game_dir = PRISM_GAME_DIRS.iter().any(|d| listing.has_dir(d));
    if listing.has_file(PRISM_CONFIG) && (has_game_dir || listing.has_file(PRISM_PACK)) {
        return Classification::Prism;
    }

    Classification::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curseforge_manifest() {
        let listing = DirListing::from_names(["minecraftinstance.json"], ["mods", "config"]);
        assert_eq!(classify(&listing), Classification::CurseForge);
    }

    #[test]
    fn test_prism_with_dot_minecraft() {
        let listing = DirListing::from_names(["instance.cfg"], [".minecraft"]);
        assert_eq!(classify(&listing), Classification::Prism);
    }

    #[test]
    fn test_prism_with_pack_file_only() {
        let listing = DirListing::from_names(["instance.cfg", "mmc-pack.json"], Vec::<String>::new());
        assert_eq!(classify(&listing), Classification::Prism);
    }

    #[test]
    fn test_prism_config_alone_is_not_enough() {
        let listing = DirListing::from_names(["instance.cfg"], ["mods"]);
        assert_eq!(classify(&listing), Classification::Unknown);
    }

    #[test]
    fn test_mods_folder_alone_is_unknown() {
        let listing = DirListing::from_names(Vec::<String>::new(), ["mods", "config", "resourcepacks"]);
        assert_eq!(classify(&listing), Classification::Unknown);
    }

    #[test]
    fn test_marker_as_directory_does_not_count() {
        let listing = DirListing::from_names(Vec::<String>::new(), ["minecraftinstance.json"]);
        assert_eq!(classify(&listing), Classification::Unknown);
    }

    #[test]
    fn test_curseforge_wins_over_prism() {
        let listing = DirListing::from_names(
            ["minecraftinstance.json", "instance.cfg"],
            [".minecraft"],
        );
        assert_eq!(classify(&listing), Classification::CurseForge);
    }

    #[test]
    fn test_read_listing() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("instance.cfg"), "name=x").unwrap();
        std::fs::create_dir(temp.path().join(".minecraft")).unwrap();
        let listing = DirListing::read(temp.path()).unwrap();
        assert!(listing.has_file("instance.cfg"));
        assert!(listing.has_dir(".minecraft"));
        assert_eq!(classify(&listing).kind(), Some(LauncherKind::Prism));
    }
}
