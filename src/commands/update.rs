//! Update command implementation
//!
//! Rebuilds the package database from the repository list:
//! 1. Read `etc/xpt/sources.txt` (fatal if unreadable)
//! 2. Fetch every repository/tag manifest in declaration order
//! 3. Warn about manifests that could not be fetched and treat them as empty
//! 4. Overwrite `var/xpt/update.txt` with the aggregated records

use console::Style;

use crate::common::display_utils::print_warning;
use crate::config::{Layout, RepositoryDescriptor, load_sources};
use crate::error::Result;
use crate::fetch::{Fetch, HttpFetcher};
use crate::index::{AggregateReport, Aggregator, PackageDatabase};
use crate::progress::ProgressDisplay;

/// Run update command
pub fn run(layout: &Layout) -> Result<()> {
    let repositories = load_sources(&layout.sources_path())?;
    let fetcher = HttpFetcher::new()?;
    update(layout, &repositories, &fetcher).map(|_| ())
}

/// Aggregate `repositories` and persist the result
pub(crate) fn update(
    layout: &Layout,
    repositories: &[RepositoryDescriptor],
    fetcher: &dyn Fetch,
) -> Result<PackageDatabase> {
    let report = aggregate_with_progress(repositories, fetcher);

    for failure in report.failures() {
        if let Some(error) = &failure.error {
            print_warning(&format!(
                "{error}; treating tag '{}' as empty",
                failure.source.tag()
            ));
        }
    }
    tracing::info!(
        sources = report.sources(),
        records = report.records().len(),
        failed = report.failures().len(),
        "aggregation finished"
    );

    let (sources, warnings) = (report.sources(), report.failures().len());
    let database = report.into_database();
    database.write(&layout.database_path())?;

    let green = Style::new().green().bold();
    println!(
        "{} {} package record(s) from {} source(s) written to {}",
        green.apply_to("Updated:"),
        database.len(),
        sources,
        layout.database_path().display()
    );
    if warnings > 0 {
        println!("  {warnings} source(s) could not be fetched");
    }

    Ok(database)
}

fn aggregate_with_progress(
    repositories: &[RepositoryDescriptor],
    fetcher: &dyn Fetch,
) -> AggregateReport {
    let total = repositories.iter().map(|r| r.tags().len().max(1)).sum();
    let progress = ProgressDisplay::new(total);

    let report = Aggregator::new(fetcher).aggregate(repositories, |source| {
        progress.update(&source.manifest_url());
        progress.inc();
    });
    progress.finish();

    report
}
