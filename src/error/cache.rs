//! Cache errors

use super::XptError;

/// Creates a cache operation failed error
pub fn operation_failed(message: impl Into<String>) -> XptError {
    XptError::CacheOperationFailed {
        message: message.into(),
    }
}
