//! Configuration errors

use super::WarmerError;

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> WarmerError {
    WarmerError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> WarmerError {
    WarmerError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> WarmerError {
    WarmerError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
