//! Instance lookup and plan errors

use super::WarmerError;

/// Creates an instance not found error
pub fn instance_not_found(query: impl Into<String>) -> WarmerError {
    WarmerError::InstanceNotFound {
        query: query.into(),
    }
}

/// Creates an empty plan error
pub fn empty(instance: impl Into<String>) -> WarmerError {
    WarmerError::EmptyPlan {
        instance: instance.into(),
    }
}
