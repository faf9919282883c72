//! Remote manifest sources and manifest parsing
//!
//! Every repository/tag pair serves a `packages.txt` listing one artifact
//! filename per line. The part of a filename before the first `_` is the
//! package name; the remainder (version, suffix) is opaque.

use crate::common::string_utils::{join_url, strip_non_printable};

use super::record::{IndexRecord, Tag};

/// File name of the manifest served under each repository/tag
pub const MANIFEST_FILE: &str = "packages.txt";

/// Separator between the package name and the rest of a filename
pub const NAME_SEPARATOR: char = '_';

/// One manifest location: a repository URL under a single tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSource {
    tag: Tag,
    repo_url: String,
}

impl ManifestSource {
    /// Build the source for `base_url` under `tag`.
    ///
    /// Named tags are appended as a path segment; untagged repositories use
    /// the base URL as is.
    pub fn new(base_url: &str, tag: Tag) -> Self {
        let repo_url = match &tag {
            Tag::Untagged => base_url.trim_end_matches('/').to_string(),
            Tag::Named(name) => join_url(base_url, name),
        };
        Self { tag, repo_url }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn manifest_url(&self) -> String {
        join_url(&self.repo_url, MANIFEST_FILE)
    }

    pub fn artifact_url(&self, filename: &str) -> String {
        join_url(&self.repo_url, filename)
    }

    /// Turn a manifest body into records, in manifest order.
    pub fn records(&self, manifest: &str) -> Vec<IndexRecord> {
        parse_manifest(manifest)
            .into_iter()
            .map(|filename| {
                if filename.contains(' ') {
                    tracing::warn!(
                        source = %self.manifest_url(),
                        %filename,
                        "manifest entry contains a space and will not survive a reload"
                    );
                }
                IndexRecord::new(
                    self.tag.clone(),
                    package_name(&filename),
                    self.artifact_url(&filename),
                )
            })
            .collect()
    }
}

/// Split a manifest into filenames, dropping entries that are empty once
/// non-printable characters are removed.
pub fn parse_manifest(manifest: &str) -> Vec<String> {
    manifest
        .split('\n')
        .map(strip_non_printable)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Package name for a filename: everything before the first `_`.
pub fn package_name(filename: &str) -> &str {
    filename
        .split_once(NAME_SEPARATOR)
        .map_or(filename, |(name, _)| name)
}
