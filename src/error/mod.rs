//! Error types and handling for mcwarm
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Only precondition violations surface as [`WarmerError`]. Per-file problems
//! during selection and execution are values on the plan or result instead.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`plan`]: Instance lookup and plan errors
//! - [`launcher`]: External launcher and file browser errors

pub mod config;
pub mod fs;
pub mod launcher;
pub mod plan;

pub use config::{
    invalid as config_invalid, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
pub use fs::{io_error, root_not_found};
pub use launcher::{
    launch_failed, not_found as launcher_not_found, reveal_failed, unsupported_platform,
};
pub use plan::{empty as empty_plan, instance_not_found};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mcwarm operations
#[derive(Error, Diagnostic, Debug)]
pub enum WarmerError {
    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(mcwarm::config::invalid),
        help("Bounds and worker counts must be positive numbers")
    )]
    ConfigInvalid { message: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(mcwarm::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(mcwarm::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Instance and plan errors
    #[error("Instance '{query}' not found")]
    #[diagnostic(
        code(mcwarm::instance::not_found),
        help("Run 'mcwarm list' to see discovered instances, or pass a path to the instance folder")
    )]
    InstanceNotFound { query: String },

    #[error("Nothing to warm for instance '{instance}'")]
    #[diagnostic(
        code(mcwarm::plan::empty),
        help("Enable more categories or raise --max-files / --max-bytes")
    )]
    EmptyPlan { instance: String },

    // File system errors
    #[error("Root directory not found: {path}")]
    #[diagnostic(code(mcwarm::fs::root_not_found))]
    RootNotFound { path: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(mcwarm::fs::io_error))]
    IoError { message: String },

    // Launcher errors
    #[error("{launcher} was not found on this system")]
    #[diagnostic(
        code(mcwarm::launcher::not_found),
        help("Pass --launch-cmd with a custom command. Use {{instance}} as a placeholder")
    )]
    LauncherNotFound { launcher: String },

    #[error("Failed to launch '{command}': {reason}")]
    #[diagnostic(code(mcwarm::launcher::launch_failed))]
    LaunchFailed { command: String, reason: String },

    #[error("Failed to open folder {path}: {reason}")]
    #[diagnostic(code(mcwarm::launcher::reveal_failed))]
    RevealFailed { path: String, reason: String },

    #[error("Operation not supported on {platform}")]
    #[diagnostic(code(mcwarm::launcher::unsupported_platform))]
    UnsupportedPlatform { platform: String },
}

impl From<std::io::Error> for WarmerError {
    fn from(err: std::io::Error) -> Self {
        WarmerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for WarmerError {
    fn from(err: serde_yaml::Error) -> Self {
        WarmerError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for WarmerError {
    fn from(err: serde_json::Error) -> Self {
        WarmerError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, WarmerError>;
