//! Resolution errors

use super::XptError;

/// Creates an ambiguous package error listing every conflicting url
pub fn ambiguous(name: impl Into<String>, tag: impl ToString, urls: &[&str]) -> XptError {
    XptError::AmbiguousPackage {
        name: name.into(),
        tag: tag.to_string(),
        urls: urls.join(", "),
    }
}

/// Creates a package not found error
pub fn not_found(name: impl Into<String>, tag: impl ToString) -> XptError {
    XptError::PackageNotFound {
        name: name.into(),
        tag: tag.to_string(),
    }
}

/// Creates the summary error for an install that left names unresolved
pub fn install_incomplete(names: &[String]) -> XptError {
    XptError::InstallIncomplete {
        count: names.len(),
        names: names.join(", "),
    }
}
