//! Error types and handling for xpt
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Repository list and install request errors
//! - [`fs`]: File system errors
//! - [`fetch`]: Manifest and artifact transfer errors
//! - [`resolve`]: Package resolution errors
//! - [`cache`]: Cache errors

pub mod cache;
pub mod config;
pub mod fetch;
pub mod fs;
pub mod resolve;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for xpt operations
#[derive(Error, Diagnostic, Debug)]
pub enum XptError {
    // Configuration errors
    #[error("Repository list not found: {path}")]
    #[diagnostic(
        code(xpt::config::sources_not_found),
        help("Create it with one 'repo <url> [tag ...]' line per repository")
    )]
    SourcesNotFound { path: String },

    #[error("Failed to read repository list: {path}: {reason}")]
    #[diagnostic(code(xpt::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Could not determine installation root: {reason}")]
    #[diagnostic(
        code(xpt::config::root_unavailable),
        help("Pass --root <dir> or set XPT_ROOT")
    )]
    RootUnavailable { reason: String },

    #[error("Invalid install request: {message}")]
    #[diagnostic(
        code(xpt::config::invalid_request),
        help("Usage: xpt install <name> [<name> ...] [@ <tag>]")
    )]
    InvalidInstallRequest { message: String },

    // Database errors
    #[error("Package database not found: {path}")]
    #[diagnostic(
        code(xpt::database::not_found),
        help("Run 'xpt update' to download repository manifests first")
    )]
    DatabaseNotFound { path: String },

    // Fetch errors
    #[error("Failed to fetch {url}: {reason}")]
    #[diagnostic(
        code(xpt::fetch::failed),
        help("Check that the repository URL is correct and reachable")
    )]
    FetchFailed { url: String, reason: String },

    #[error("Integrity check failed for {url}: expected {expected} bytes, got {actual}")]
    #[diagnostic(code(xpt::fetch::integrity_failed))]
    IntegrityCheckFailed {
        url: String,
        expected: u64,
        actual: u64,
    },

    // Resolution errors
    #[error("More than one url for package '{name}' (tag {tag}): {urls}")]
    #[diagnostic(
        code(xpt::resolve::ambiguous),
        help("Remove the duplicate entry from one of the repositories, or install with a different tag")
    )]
    AmbiguousPackage {
        name: String,
        tag: String,
        urls: String,
    },

    #[error("Package '{name}' not found (tag {tag})")]
    #[diagnostic(
        code(xpt::resolve::not_found),
        help("Run 'xpt list' to see available packages")
    )]
    PackageNotFound { name: String, tag: String },

    #[error("{count} requested package(s) could not be installed: {names}")]
    #[diagnostic(code(xpt::install::incomplete))]
    InstallIncomplete { count: usize, names: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(xpt::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(xpt::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(xpt::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(xpt::fs::io_error))]
    IoError { message: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(xpt::cache::operation_failed))]
    CacheOperationFailed { message: String },
}

impl From<std::io::Error> for XptError {
    fn from(err: std::io::Error) -> Self {
        XptError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for XptError {
    fn from(err: reqwest::Error) -> Self {
        XptError::FetchFailed {
            url: err
                .url()
                .map_or_else(|| "unknown".to_string(), ToString::to_string),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, XptError>;
