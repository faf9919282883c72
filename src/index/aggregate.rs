//! Index aggregation
//!
//! Turns the declared repositories into one [`PackageDatabase`]. Each
//! repository/tag pair is an independent manifest source; sources are fetched
//! one at a time, in declaration order, and their records are appended in
//! manifest order. Nothing is merged or deduplicated across sources.

use crate::config::RepositoryDescriptor;
use crate::error::XptError;
use crate::fetch::Fetch;

use super::database::PackageDatabase;
use super::manifest::ManifestSource;
use super::record::IndexRecord;

/// Result of processing a single manifest source
#[derive(Debug)]
pub struct SourceOutcome {
    pub source: ManifestSource,
    pub records: Vec<IndexRecord>,
    /// Set when the manifest could not be fetched; `records` is then empty
    pub error: Option<XptError>,
}

/// Accumulated result of an aggregation run
#[derive(Debug, Default)]
pub struct AggregateReport {
    records: Vec<IndexRecord>,
    sources: usize,
    failures: Vec<SourceOutcome>,
}

impl AggregateReport {
    /// Append one source's outcome; failed sources contribute no records
    pub fn push(&mut self, mut outcome: SourceOutcome) {
        self.sources += 1;
        self.records.append(&mut outcome.records);
        if outcome.error.is_some() {
            self.failures.push(outcome);
        }
    }

    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    /// Number of manifest sources processed
    pub fn sources(&self) -> usize {
        self.sources
    }

    /// Sources whose manifest fetch failed
    pub fn failures(&self) -> &[SourceOutcome] {
        &self.failures
    }

    pub fn into_database(self) -> PackageDatabase {
        PackageDatabase::new(self.records)
    }
}

/// Builds a package database from repository descriptors
pub struct Aggregator<'a, F: Fetch + ?Sized> {
    fetcher: &'a F,
}

impl<'a, F: Fetch + ?Sized> Aggregator<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Fetch and parse a single manifest source.
    ///
    /// A failed fetch is not fatal: the source is treated as an empty
    /// manifest and the error is carried in the outcome.
    pub fn collect(&self, source: &ManifestSource) -> SourceOutcome {
        let url = source.manifest_url();
        match self.fetcher.fetch_text(&url) {
            Ok(manifest) => {
                let records = source.records(&manifest);
                tracing::debug!(
                    %url,
                    tag = %source.tag(),
                    records = records.len(),
                    "parsed manifest"
                );
                SourceOutcome {
                    source: source.clone(),
                    records,
                    error: None,
                }
            }
            Err(error) => {
                tracing::debug!(%url, %error, "manifest fetch failed, treating source as empty");
                SourceOutcome {
                    source: source.clone(),
                    records: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    /// Process every source of every repository, in order.
    ///
    /// `on_source` is called before each manifest is fetched.
    pub fn aggregate(
        &self,
        repositories: &[RepositoryDescriptor],
        mut on_source: impl FnMut(&ManifestSource),
    ) -> AggregateReport {
        let mut report = AggregateReport::default();
        for source in repositories.iter().flat_map(RepositoryDescriptor::sources) {
            on_source(&source);
            report.push(self.collect(&source));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_sources;
    use crate::index::Tag;
    use crate::test_fixtures::MemoryFetcher;

    #[test]
    fn test_tagged_repository_scenario() {
        let fetcher = MemoryFetcher::new().with(
            "http://example.test/repo/beta/packages.txt",
            "tool_1.0.tar\n",
        );
        let repos = parse_sources("repo http://example.test/repo beta\n");

        let database = Aggregator::new(&fetcher).aggregate(&repos, |_| {}).into_database();
        assert_eq!(
            database.render(),
            "beta tool http://example.test/repo/beta/tool_1.0.tar\n"
        );
    }

    #[test]
    fn test_untagged_repository_uses_sentinel() {
        let fetcher = MemoryFetcher::new().with("http://x/packages.txt", "foo_1.2.3.tar\nbar\n");
        let repos = parse_sources("repo http://x\n");

        let report = Aggregator::new(&fetcher).aggregate(&repos, |_| {});
        let records = report.records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| *r.tag() == Tag::Untagged));
        assert_eq!(records[0].name(), "foo");
        assert_eq!(records[0].url, "http://x/foo_1.2.3.tar");
        assert_eq!(records[1].name(), "bar");
        assert_eq!(records[1].url, "http://x/bar");
    }

    #[test]
    fn test_each_tag_is_a_separate_source() {
        let fetcher = MemoryFetcher::new()
            .with("http://x/a/packages.txt", "tool_1.tar\n")
            .with("http://x/b/packages.txt", "tool_1.tar\n");
        let repos = parse_sources("repo http://x a b\n");

        let report = Aggregator::new(&fetcher).aggregate(&repos, |_| {});
        assert_eq!(report.sources(), 2);
        assert_eq!(
            report.records(),
            [
                IndexRecord::new(Tag::parse("a"), "tool", "http://x/a/tool_1.tar"),
                IndexRecord::new(Tag::parse("b"), "tool", "http://x/b/tool_1.tar"),
            ]
        );
    }

    #[test]
    fn test_failed_fetch_is_a_warning() {
        let fetcher = MemoryFetcher::new().with("http://good/packages.txt", "ok_1.tar\n");
        let repos = parse_sources("repo http://bad\nrepo http://good\n");

        let report = Aggregator::new(&fetcher).aggregate(&repos, |_| {});
        assert_eq!(report.sources(), 2);
        assert_eq!(report.failures().len(), 1);
        assert_eq!(
            report.failures()[0].source.manifest_url(),
            "http://bad/packages.txt"
        );
        assert_eq!(report.records().len(), 1);
        assert_eq!(report.records()[0].name(), "ok");
    }

    #[test]
    fn test_order_follows_declarations_then_tags_then_entries() {
        let fetcher = MemoryFetcher::new()
            .with("http://one/stable/packages.txt", "b_1\na_1\n")
            .with("http://one/beta/packages.txt", "c_1\n")
            .with("http://two/packages.txt", "d_1\n");
        let repos = parse_sources("repo http://one stable beta\nrepo http://two\n");

        let mut seen = Vec::new();
        let report = Aggregator::new(&fetcher).aggregate(&repos, |source| {
            seen.push(source.tag().clone());
        });
        assert_eq!(seen, [Tag::parse("stable"), Tag::parse("beta"), Tag::Untagged]);
        let names: Vec<&str> = report.records().iter().map(IndexRecord::name).collect();
        assert_eq!(names, ["b", "a", "c", "d"]);
        assert_eq!(
            fetcher.requested(),
            [
                "http://one/stable/packages.txt",
                "http://one/beta/packages.txt",
                "http://two/packages.txt",
            ]
        );
    }

    #[test]
    fn test_no_repositories_gives_empty_database() {
        let fetcher = MemoryFetcher::new();
        let report = Aggregator::new(&fetcher).aggregate(&[], |_| {});
        assert_eq!(report.sources(), 0);
        assert!(report.into_database().is_empty());
    }
}
