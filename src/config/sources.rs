//! Repository list (`sources.txt`) parsing
//!
//! The list is plain text with one directive per line:
//!
//! ```text
//! # comments and blank lines are ignored
//! repo  http://example.test/repo          beta stable
//! repo  http://mirror.test/untagged
//! ```
//!
//! Columns may be aligned with any amount of whitespace.

use std::path::Path;

use crate::error::{Result, config};
use crate::index::{ManifestSource, Tag};

/// Token that opens a repository declaration
pub const REPO_DIRECTIVE: &str = "repo";

/// A repository declared in the repository list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    url: String,
    tags: Vec<String>,
}

impl RepositoryDescriptor {
    pub fn new(url: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            url: url.into(),
            tags,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn is_untagged(&self) -> bool {
        self.tags.is_empty()
    }

    /// Parse a single line of the repository list.
    ///
    /// Returns `None` for anything that is not a `repo` directive. A directive
    /// without a URL is skipped as well, with a warning.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line
            .split_whitespace()
            .map(crate::common::string_utils::strip_non_printable)
            .filter(|field| !field.is_empty());

        if fields.next().as_deref() != Some(REPO_DIRECTIVE) {
            return None;
        }

        let Some(url) = fields.next() else {
            tracing::warn!(%line, "repo directive without a url, skipping");
            return None;
        };

        Some(Self::new(url, fields.collect()))
    }

    /// Manifest sources for this repository: one per tag, in declaration
    /// order, or a single untagged source.
    pub fn sources(&self) -> Vec<ManifestSource> {
        if self.is_untagged() {
            return vec![ManifestSource::new(&self.url, Tag::Untagged)];
        }

        self.tags
            .iter()
            .map(|tag| ManifestSource::new(&self.url, Tag::parse(tag)))
            .collect()
    }
}

/// Parse every repository declaration in `text`, in file order
pub fn parse_sources(text: &str) -> Vec<RepositoryDescriptor> {
    text.lines()
        .filter_map(RepositoryDescriptor::parse_line)
        .collect()
}

/// Read and parse the repository list at `path`
pub fn load_sources(path: &Path) -> Result<Vec<RepositoryDescriptor>> {
    let text = std::fs::read_to_string(path).map_err(|e| config::sources_unreadable(path, &e))?;

    let repositories = parse_sources(&text);
    tracing::debug!(
        path = %path.display(),
        count = repositories.len(),
        "loaded repository list"
    );

    Ok(repositories)
}
