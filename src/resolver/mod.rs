//! Install resolution
//!
//! Maps each requested `(tag, name)` to the single artifact URL that provides
//! it. Matching is exact and case-sensitive on both fields; a requested tag
//! never falls back to untagged records.
//!
//! All names are resolved before anything is installed, so an ambiguous name
//! aborts the whole request without side effects.

pub mod request;

use crate::error::{Result, resolve};
use crate::index::{PackageDatabase, PackageKey};

pub use request::InstallRequest;

/// Outcome of resolving one requested name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one record provides the key
    Found { key: PackageKey, url: String },
    /// No record provides the key
    Missing { key: PackageKey },
}

impl Resolution {
    pub fn key(&self) -> &PackageKey {
        match self {
            Resolution::Found { key, .. } | Resolution::Missing { key } => key,
        }
    }
}

/// Resolve a single key against the database
pub fn resolve_one(database: &PackageDatabase, key: PackageKey) -> Result<Resolution> {
    let urls: Vec<&str> = database
        .lookup(&key)
        .into_iter()
        .map(|record| record.url.as_str())
        .collect();

    match urls.as_slice() {
        [] => Ok(Resolution::Missing { key }),
        [url] => Ok(Resolution::Found {
            url: (*url).to_string(),
            key,
        }),
        _ => Err(resolve::ambiguous(&key.name, &key.tag, &urls)),
    }
}

/// Resolve every name of `request`, in request order.
///
/// Fails on the first ambiguous name. Missing names are returned as
/// [`Resolution::Missing`] so the caller can report them and carry on.
pub fn resolve(database: &PackageDatabase, request: &InstallRequest) -> Result<Vec<Resolution>> {
    request
        .keys()
        .map(|key| {
            let resolution = resolve_one(database, key)?;
            tracing::debug!(key = %resolution.key(), ?resolution, "resolved");
            Ok(resolution)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XptError;
    use crate::index::{IndexRecord, Tag};

    fn database() -> PackageDatabase {
        PackageDatabase::new(vec![
            IndexRecord::new(
                Tag::parse("beta"),
                "tool",
                "http://example.test/repo/beta/tool_1.0.tar",
            ),
            IndexRecord::new(Tag::Untagged, "foo", "http://x/foo_1.tar"),
            IndexRecord::new(Tag::parse("stable"), "dup", "http://a/stable/dup_1.tar"),
            IndexRecord::new(Tag::parse("stable"), "dup", "http://b/stable/dup_2.tar"),
        ])
    }

    fn request(names: &[&str], tag: &str) -> InstallRequest {
        InstallRequest::new(
            names.iter().map(ToString::to_string).collect(),
            Tag::parse(tag),
        )
    }

    #[test]
    fn test_single_match_resolves() {
        let resolved = resolve(&database(), &request(&["tool"], "beta")).unwrap();
        assert_eq!(
            resolved,
            [Resolution::Found {
                key: PackageKey::new(Tag::parse("beta"), "tool"),
                url: "http://example.test/repo/beta/tool_1.0.tar".to_string(),
            }]
        );
    }

    #[test]
    fn test_other_tag_is_missing() {
        let resolved = resolve(&database(), &request(&["tool"], "stable")).unwrap();
        assert!(matches!(resolved.as_slice(), [Resolution::Missing { .. }]));
    }

    #[test]
    fn test_requested_tag_does_not_fall_back_to_untagged() {
        let resolved = resolve(&database(), &request(&["foo"], "beta")).unwrap();
        assert!(matches!(resolved.as_slice(), [Resolution::Missing { .. }]));
    }

    #[test]
    fn test_no_tag_matches_untagged_records() {
        let resolved = resolve(&database(), &request(&["foo"], "")).unwrap();
        assert!(matches!(
            resolved.as_slice(),
            [Resolution::Found { url, .. }] if url == "http://x/foo_1.tar"
        ));
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let resolved = resolve(&database(), &request(&["Tool"], "beta")).unwrap();
        assert!(matches!(resolved.as_slice(), [Resolution::Missing { .. }]));
    }

    #[test]
    fn test_ambiguity_fails_whole_request() {
        let err = resolve(&database(), &request(&["tool", "dup"], "stable")).unwrap_err();
        match err {
            XptError::AmbiguousPackage { name, tag, urls } => {
                assert_eq!(name, "dup");
                assert_eq!(tag, "stable");
                assert_eq!(urls, "http://a/stable/dup_1.tar, http://b/stable/dup_2.tar");
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_and_found_keep_request_order() {
        let resolved = resolve(&database(), &request(&["nope", "foo", "foo"], "")).unwrap();
        let names: Vec<&str> = resolved.iter().map(|r| r.key().name.as_str()).collect();
        assert_eq!(names, ["nope", "foo", "foo"]);
        assert!(matches!(resolved[0], Resolution::Missing { .. }));
        assert!(matches!(resolved[2], Resolution::Found { .. }));
    }
}
