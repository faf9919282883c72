//! Package database persistence
//!
//! The database is a flat text file holding one [`IndexRecord`] per line. It is
//! written wholesale by `xpt update` and read wholesale by every later command;
//! there is no versioning and no merge with earlier contents.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs};

use super::record::{IndexRecord, PackageKey, Tag};

/// Ordered sequence of index records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDatabase {
    records: Vec<IndexRecord>,
}

impl PackageDatabase {
    pub fn new(records: Vec<IndexRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse the persisted text form.
    ///
    /// Lines that do not hold exactly three space-separated fields are
    /// dropped, including the empty line after the final newline.
    pub fn parse(text: &str) -> Self {
        let mut dropped = 0usize;
        let records = text
            .split('\n')
            .filter_map(|line| {
                let record = IndexRecord::parse_line(line);
                if record.is_none() && !line.is_empty() {
                    dropped += 1;
                }
                record
            })
            .collect();

        if dropped > 0 {
            tracing::debug!(dropped, "skipped malformed database lines");
        }

        Self { records }
    }

    /// Render the persisted text form, one record per line
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|record| format!("{record}\n"))
            .collect()
    }

    /// Load the database at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| fs::database_unreadable(path, &e))?;
        let database = Self::parse(&text);
        tracing::debug!(path = %path.display(), records = database.len(), "loaded package database");
        Ok(database)
    }

    /// Replace the database at `path` with this one.
    ///
    /// Missing parent directories are created. The contents go to a temp file
    /// next to `path` first and are then moved over it.
    pub fn write(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        std::fs::create_dir_all(parent).map_err(|e| fs::create_dir_failed(parent, e))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| fs::write_failed(path, e))?;
        temp.write_all(self.render().as_bytes())
            .map_err(|e| fs::write_failed(path, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| fs::write_failed(path, e))?;
        temp.persist(path)
            .map_err(|e| fs::write_failed(path, e.error))?;

        tracing::debug!(path = %path.display(), records = self.len(), "wrote package database");
        Ok(())
    }

    /// Every record stored under `key`, in database order
    pub fn lookup(&self, key: &PackageKey) -> Vec<&IndexRecord> {
        self.records
            .iter()
            .filter(|record| &record.key == key)
            .collect()
    }

    /// Records matching an optional exact name and an optional tag
    pub fn filter<'a>(
        &'a self,
        name: Option<&'a str>,
        tag: Option<&'a Tag>,
    ) -> impl Iterator<Item = &'a IndexRecord> + 'a {
        self.records.iter().filter(move |record| {
            name.is_none_or(|name| record.name() == name)
                && tag.is_none_or(|tag| record.tag() == tag)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::XptError;
    use crate::test_fixtures::create_temp_dir;

    fn sample() -> PackageDatabase {
        PackageDatabase::new(vec![
            IndexRecord::new(Tag::Untagged, "foo", "http://x/foo_1.tar"),
            IndexRecord::new(Tag::parse("beta"), "tool", "http://y/beta/tool_1.0.tar"),
            IndexRecord::new(Tag::parse("stable"), "tool", "http://y/stable/tool_0.9.tar"),
        ])
    }

    #[test]
    fn test_render() {
        assert_eq!(
            sample().render(),
            "notag foo http://x/foo_1.tar\n\
             beta tool http://y/beta/tool_1.0.tar\n\
             stable tool http://y/stable/tool_0.9.tar\n"
        );
        assert_eq!(PackageDatabase::default().render(), "");
    }

    #[test]
    fn test_parse_drops_malformed_lines() {
        let text = "notag foo http://x/foo_1.tar\n\
                    garbage\n\
                    beta tool http://y/beta/tool_1.0.tar extra\n\
                    \n\
                    beta tool http://y/beta/tool_1.0.tar\n";
        let database = PackageDatabase::parse(text);
        assert_eq!(
            database.render(),
            "notag foo http://x/foo_1.tar\nbeta tool http://y/beta/tool_1.0.tar\n"
        );
    }

    #[test]
    fn test_parse_does_not_read_empty_tag_as_untagged() {
        let database = PackageDatabase::parse(" foo http://x/foo_1.tar\n");
        assert!(database.is_empty());
        assert!(
            database
                .lookup(&PackageKey::new(Tag::Untagged, "foo"))
                .is_empty()
        );
    }

    #[test]
    fn test_write_then_load_preserves_order() {
        let temp = create_temp_dir();
        let path = temp.path().join("var/xpt/update.txt");

        sample().write(&path).unwrap();
        assert_eq!(PackageDatabase::load(&path).unwrap(), sample());
    }

    #[test]
    fn test_write_overwrites_previous_contents() {
        let temp = create_temp_dir();
        let path = temp.path().join("update.txt");

        sample().write(&path).unwrap();
        let smaller = PackageDatabase::new(vec![IndexRecord::new(
            Tag::Untagged,
            "bar",
            "http://x/bar",
        )]);
        smaller.write(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "notag bar http://x/bar\n"
        );
    }

    #[test]
    fn test_write_fails_when_parent_is_a_file() {
        let temp = create_temp_dir();
        let blocker = temp.path().join("var");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = sample().write(&blocker.join("xpt/update.txt")).unwrap_err();
        assert!(matches!(err, XptError::DirectoryCreateFailed { .. }));
    }

    #[test]
    fn test_load_missing_database() {
        let temp = create_temp_dir();
        let err = PackageDatabase::load(&temp.path().join("update.txt")).unwrap_err();
        assert!(matches!(err, XptError::DatabaseNotFound { .. }));
    }

    #[test]
    fn test_lookup() {
        let database = sample();
        let beta = PackageKey::new(Tag::parse("beta"), "tool");
        let hits = database.lookup(&beta);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].url, "http://y/beta/tool_1.0.tar");

        assert!(database.lookup(&PackageKey::new(Tag::Untagged, "tool")).is_empty());
        assert!(database.lookup(&PackageKey::new(Tag::parse("beta"), "Tool")).is_empty());
    }

    #[test]
    fn test_filter() {
        let database = sample();
        assert_eq!(database.filter(None, None).count(), 3);
        assert_eq!(database.filter(Some("tool"), None).count(), 2);
        let stable = Tag::parse("stable");
        assert_eq!(database.filter(Some("tool"), Some(&stable)).count(), 1);
        assert_eq!(database.filter(Some("foo"), Some(&stable)).count(), 0);
    }
}
