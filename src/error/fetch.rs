//! Fetch errors

use super::XptError;

/// Creates a fetch failed error
pub fn failed(url: impl Into<String>, reason: impl ToString) -> XptError {
    XptError::FetchFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an integrity check failed error
pub fn integrity_failed(url: impl Into<String>, expected: u64, actual: u64) -> XptError {
    XptError::IntegrityCheckFailed {
        url: url.into(),
        expected,
        actual,
    }
}
