//! Locating installed launcher applications

use std::path::PathBuf;

use tracing::debug;

use crate::domain::LauncherKind;
use crate::resolver::{HostDirs, OsIdentity};

/// An installed launcher and the command that starts it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedLauncher {
    pub kind: LauncherKind,
    pub executable: PathBuf,
    /// Suggested launch template (see [`super::launch`])
    pub command_template: String,
}

impl DetectedLauncher {
    fn new(kind: LauncherKind, executable: PathBuf) -> Self {
        let quoted = shell_words::quote(&executable.to_string_lossy()).into_owned();
        let command_template = match kind {
            // Prism opens an instance directly by folder name
            LauncherKind::Prism => format!("{quoted} --launch {{instance}}"),
            // CurseForge has no per-instance argument; just open the app
            LauncherKind::CurseForge => quoted,
        };
        Self {
            kind,
            executable,
            command_template,
        }
    }

    /// Command that opens the launcher without an instance
    pub fn open_command(&self) -> String {
        shell_words::quote(&self.executable.to_string_lossy()).into_owned()
    }
}

/// Executable names looked up on `PATH`
fn path_names(kind: LauncherKind) -> &'static [&'static str] {
    match kind {
        LauncherKind::Prism => &["prismlauncher"],
        LauncherKind::CurseForge => &["curseforge", "CurseForge"],
    }
}

/// Well-known install locations outside `PATH`
pub fn known_locations(
    kind: LauncherKind,
    os: OsIdentity,
    dirs: &HostDirs,
    program_files: Option<PathBuf>,
) -> Vec<PathBuf> {
    let local_programs = dirs.home.join("AppData").join("Local").join("Programs");
    match (kind, os) {
        (LauncherKind::CurseForge, OsIdentity::Windows) => {
            let mut paths = vec![local_programs.join("CurseForge").join("CurseForge.exe")];
            if let Some(program_files) = program_files {
                paths.push(program_files.join("CurseForge").join("CurseForge.exe"));
            }
            paths
        }
        (LauncherKind::Prism, OsIdentity::Windows) => {
            vec![local_programs.join("PrismLauncher").join("prismlauncher.exe")]
        }
        (LauncherKind::CurseForge, OsIdentity::MacOs) => vec![
            PathBuf::from("/Applications/CurseForge.app/Contents/MacOS/CurseForge"),
            dirs.home
                .join("Applications/CurseForge.app/Contents/MacOS/CurseForge"),
        ],
        (LauncherKind::Prism, OsIdentity::MacOs) => vec![
            PathBuf::from("/Applications/PrismLauncher.app/Contents/MacOS/prismlauncher"),
            dirs.home
                .join("Applications/PrismLauncher.app/Contents/MacOS/prismlauncher"),
        ],
        (_, OsIdentity::Linux) => Vec::new(),
    }
}

/// Find the launcher for `kind`: `PATH` first, then well-known locations
pub fn detect_launcher(
    kind: LauncherKind,
    os: OsIdentity,
    dirs: &HostDirs,
) -> Option<DetectedLauncher> {
    for name in path_names(kind) {
        if let Ok(path) = which::which(name) {
            debug!(%kind, path = %path.display(), "launcher found on PATH");
            return Some(DetectedLauncher::new(kind, path));
        }
    }

    let program_files = std::env::var_os("ProgramFiles").map(PathBuf::from);
    known_locations(kind, os, dirs, program_files)
        .into_iter()
        .find(|path| path.is_file())
        .inspect(|path| debug!(%kind, path = %path.display(), "launcher found"))
        .map(|path| DetectedLauncher::new(kind, path))
}
