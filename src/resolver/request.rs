//! Install request parsing
//!
//! `xpt install foo bar @ beta` asks for `foo` and `bar` under tag `beta`.
//! Without `@`, names resolve against untagged repositories.

use crate::error::{Result, config};
use crate::index::{PackageKey, Tag};

/// Token separating package names from the tag
pub const TAG_SEPARATOR: &str = "@";

/// Names to install and the tag they are looked up under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    names: Vec<String>,
    tag: Tag,
}

impl InstallRequest {
    pub fn new(names: Vec<String>, tag: Tag) -> Self {
        Self { names, tag }
    }

    /// Parse positional install arguments.
    ///
    /// Everything before `@` is a package name, kept in order and without
    /// deduplication. `@` must be followed by exactly one tag.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let (names, tag) = match args.iter().position(|arg| arg == TAG_SEPARATOR) {
            Some(at) => {
                let tag = match &args[at + 1..] {
                    [tag] if tag != TAG_SEPARATOR => Tag::parse(tag),
                    [] => return Err(config::invalid_request("missing tag after '@'")),
                    _ => {
                        return Err(config::invalid_request(
                            "'@' must be followed by exactly one tag",
                        ));
                    }
                };
                (&args[..at], tag)
            }
            None => (args, Tag::Untagged),
        };

        if names.is_empty() {
            return Err(config::invalid_request("no package names given"));
        }

        Ok(Self::new(names.to_vec(), tag))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Lookup keys, one per requested name, in request order
    pub fn keys(&self) -> impl Iterator<Item = PackageKey> + '_ {
        self.names
            .iter()
            .map(|name| PackageKey::new(self.tag.clone(), name.clone()))
    }
}
