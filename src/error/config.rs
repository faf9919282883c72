//! Configuration errors

use std::path::Path;

use super::XptError;

/// Creates an error for a repository list that could not be read.
///
/// A missing file gets its own variant so the diagnostic can tell the user
/// how to create one.
pub fn sources_unreadable(path: &Path, err: &std::io::Error) -> XptError {
    if err.kind() == std::io::ErrorKind::NotFound {
        XptError::SourcesNotFound {
            path: path.display().to_string(),
        }
    } else {
        XptError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Creates an invalid install request error
pub fn invalid_request(message: impl Into<String>) -> XptError {
    XptError::InvalidInstallRequest {
        message: message.into(),
    }
}

/// Creates a root unavailable error
pub fn root_unavailable(reason: impl Into<String>) -> XptError {
    XptError::RootUnavailable {
        reason: reason.into(),
    }
}
