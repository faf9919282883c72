//! List command implementation
//!
//! This command prints the records of the package database, optionally
//! narrowed to one package name and/or one tag.

use console::Style;

use crate::cli::ListArgs;
use crate::config::Layout;
use crate::error::Result;
use crate::index::{IndexRecord, PackageDatabase, Tag};

/// Run list command
pub fn run(layout: &Layout, args: &ListArgs) -> Result<()> {
    let database = PackageDatabase::load(&layout.database_path())?;
    if database.is_empty() {
        println!("Package database is empty. Run 'xpt update' first.");
        return Ok(());
    }

    let tag = args.tag.as_deref().map(Tag::parse);
    let records: Vec<&IndexRecord> = database
        .filter(args.name.as_deref(), tag.as_ref())
        .collect();

    if records.is_empty() {
        println!("No packages found.");
        return Ok(());
    }

    println!("Packages ({}):", records.len());
    println!();
    for record in records {
        display_record(record);
    }

    Ok(())
}

fn display_record(record: &IndexRecord) {
    let name = Style::new().cyan().bold();
    let tag = Style::new().yellow();
    let url = Style::new().dim();
    println!(
        "  {} {}  {}",
        name.apply_to(record.name()),
        tag.apply_to(format!("@ {}", record.tag())),
        url.apply_to(&record.url)
    );
}
