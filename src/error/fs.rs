//! File system errors

use super::WarmerError;

/// Creates a root not found error
pub fn root_not_found(path: impl Into<String>) -> WarmerError {
    WarmerError::RootNotFound { path: path.into() }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> WarmerError {
    WarmerError::IoError {
        message: message.into(),
    }
}
