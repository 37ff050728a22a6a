//! Version command implementation
//!
//! Prints the version together with where this build looks for its
//! configuration, which helps when filing launcher detection issues.

use mcwarm::config::{CONFIG_ENV, default_config_path};
use mcwarm::domain::LauncherKind;
use mcwarm::error::Result;
use mcwarm::logging::LOG_ENV;
use mcwarm::resolver::OsIdentity;

/// Run version command
pub fn run() -> Result<()> {
    for line in report_lines() {
        println!("{line}");
    }
    Ok(())
}

fn report_lines() -> Vec<String> {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    let launchers = LauncherKind::ALL
        .iter()
        .map(|kind| kind.display_name())
        .collect::<Vec<_>>()
        .join(", ");
    let config = std::env::var_os(CONFIG_ENV)
        .map(std::path::PathBuf::from)
        .or_else(default_config_path)
        .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());

    vec![
        format!("mcwarm {}", env!("CARGO_PKG_VERSION")),
        format!("  {} build for {}", profile, OsIdentity::current()),
        format!("  Launchers: {launchers}"),
        format!("  Config: {config}"),
        format!("  Log filter: ${LOG_ENV}"),
    ]
}
