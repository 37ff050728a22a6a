//! Host operating system identity and user directories

use std::fmt;
use std::path::{Path, PathBuf};

/// Operating system family the resolver targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsIdentity {
    Windows,
    MacOs,
    /// Linux and every other Unix-like system
    Linux,
}

impl OsIdentity {
    /// Identity of the running host, decided once at startup
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            OsIdentity::Windows
        } else if cfg!(target_os = "macos") {
            OsIdentity::MacOs
        } else {
            OsIdentity::Linux
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OsIdentity::Windows => "windows",
            OsIdentity::MacOs => "macos",
            OsIdentity::Linux => "linux",
        }
    }
}

impl fmt::Display for OsIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User directories the resolver derives launcher roots from.
///
/// Passed explicitly so root resolution never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDirs {
    /// `%USERPROFILE%` or `$HOME`
    pub home: PathBuf,
    /// Roaming app data (`%APPDATA%`), `~/Library/Application Support`, or `$XDG_DATA_HOME`
    pub data: PathBuf,
    /// The user's documents folder
    pub documents: PathBuf,
}

impl HostDirs {
    /// Directories of the current user, or `None` when no home directory is known
    pub fn from_env(os: OsIdentity) -> Option<Self> {
        let home = dirs::home_dir()?;
        let defaults = Self::for_home(&home, os);
        Some(Self {
            data: dirs::data_dir().unwrap_or(defaults.data),
            documents: dirs::document_dir().unwrap_or(defaults.documents),
            home,
        })
    }

    /// Platform default layout below `home`
    pub fn for_home(home: &Path, os: OsIdentity) -> Self {
        let data = match os {
            OsIdentity::Windows => home.join("AppData").join("Roaming"),
            OsIdentity::MacOs => home.join("Library").join("Application Support"),
            OsIdentity::Linux => home.join(".local").join("share"),
        };
        Self {
            home: home.to_path_buf(),
            data,
            documents: home.join("Documents"),
        }
    }
}
