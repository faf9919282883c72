//! File system errors

use std::path::Path;

use super::XptError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> XptError {
    XptError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> XptError {
    XptError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a directory creation failed error
pub fn create_dir_failed(path: &Path, reason: impl ToString) -> XptError {
    XptError::DirectoryCreateFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an error for a package database that could not be read
pub fn database_unreadable(path: &Path, err: &std::io::Error) -> XptError {
    if err.kind() == std::io::ErrorKind::NotFound {
        XptError::DatabaseNotFound {
            path: path.display().to_string(),
        }
    } else {
        read_failed(path, err)
    }
}
