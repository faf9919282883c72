//! Index record types
//!
//! A record binds a `(tag, name)` key to one artifact URL. The persisted form
//! is a single line of three space-separated fields: `tag name url`.

use std::fmt;

/// Tag string used for repositories declared without any tag
pub const UNTAGGED: &str = "notag";

/// Channel a record belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Repository declared without tags
    Untagged,
    /// A named channel such as `beta` or `stable`
    Named(String),
}

impl Tag {
    /// Parse a tag; `notag` and the empty string both mean untagged.
    ///
    /// Stored database lines never carry an empty tag, see
    /// [`IndexRecord::parse_line`].
    pub fn parse(s: &str) -> Self {
        if s.is_empty() || s == UNTAGGED {
            Tag::Untagged
        } else {
            Tag::Named(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tag::Untagged => UNTAGGED,
            Tag::Named(tag) => tag,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup key for resolution; two records with equal keys are ambiguous
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageKey {
    pub tag: Tag,
    pub name: String,
}

impl PackageKey {
    pub fn new(tag: Tag, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.name, self.tag)
    }
}

/// One entry of the package database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub key: PackageKey,
    pub url: String,
}

impl IndexRecord {
    pub fn new(tag: Tag, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            key: PackageKey::new(tag, name),
            url: url.into(),
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.key.tag
    }

    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Parse one database line.
    ///
    /// Returns `None` unless the line splits on single spaces into exactly
    /// three non-empty fields; callers drop such lines.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.split(' ').collect();
        match fields.as_slice() {
            [tag, name, url] if !tag.is_empty() && !name.is_empty() && !url.is_empty() => {
                Some(Self::new(Tag::parse(tag), *name, *url))
            }
            _ => None,
        }
    }
}

impl fmt::Display for IndexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key.tag, self.key.name, self.url)
    }
}
