//! External launcher and file browser errors

use super::WarmerError;

/// Creates a launcher not found error
pub fn not_found(launcher: impl Into<String>) -> WarmerError {
    WarmerError::LauncherNotFound {
        launcher: launcher.into(),
    }
}

/// Creates a launch failed error
pub fn launch_failed(command: impl Into<String>, reason: impl Into<String>) -> WarmerError {
    WarmerError::LaunchFailed {
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates a reveal failed error
pub fn reveal_failed(path: impl Into<String>, reason: impl Into<String>) -> WarmerError {
    WarmerError::RevealFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported platform error
pub fn unsupported_platform(platform: impl Into<String>) -> WarmerError {
    WarmerError::UnsupportedPlatform {
        platform: platform.into(),
    }
}
