//! Opening a folder in the system file browser

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::info;

use crate::error::{Result, reveal_failed, root_not_found};
use crate::resolver::OsIdentity;

/// File browser command for `os`
pub fn browser_command(os: OsIdentity) -> &'static str {
    match os {
        OsIdentity::Windows => "explorer",
        OsIdentity::MacOs => "open",
        OsIdentity::Linux => "xdg-open",
    }
}

/// Show `path` in the file browser, without waiting for it
pub fn reveal(path: &Path, os: OsIdentity) -> Result<()> {
    if !path.exists() {
        return Err(root_not_found(path.display().to_string()));
    }

    let program = browser_command(os);
    info!(program, path = %path.display(), "revealing");
    Command::new(program)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| reveal_failed(path.display().to_string(), e.to_string()))?;
    Ok(())
}
