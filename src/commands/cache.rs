//! Cache command implementation
//!
//! Shows where artifacts are placed and what is there. Read-only.

use std::path::Path;

use crate::cache;
use crate::error::Result;

/// Run cache command
pub fn run() -> Result<()> {
    let cache_dir = cache::cache_dir()?;
    show_cache(&cache_dir)
}

fn show_cache(cache_dir: &Path) -> Result<()> {
    let stats = cache::cache_stats(cache_dir)?;

    println!("Cache Statistics:");
    println!("  Location: {}", cache_dir.display());
    println!("  Packages: {}", stats.packages);
    println!("  Artifacts: {}", stats.artifacts);
    println!("  Size: {}", stats.formatted_size());

    let packages = cache::list_cached_packages(cache_dir)?;
    if packages.is_empty() {
        println!("\nCache is empty.");
        return Ok(());
    }

    println!();
    println!("Cached packages ({}):", packages.len());
    for package in &packages {
        println!(
            "  {} @ {} ({} artifact{}, {})",
            package.name,
            package.tag,
            package.artifacts,
            if package.artifacts == 1 { "" } else { "s" },
            package.formatted_size()
        );
    }

    Ok(())
}
