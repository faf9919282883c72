//! Install command implementation
//!
//! The installation process:
//! 1. Parse names and the optional `@ <tag>` from the arguments
//! 2. Load the package database (fatal if missing)
//! 3. Resolve every name; any ambiguity aborts before anything is downloaded
//! 4. Download each resolved artifact into the cache directory
//! 5. Report names that were not found or failed to download, then fail

use std::path::Path;

use console::Style;

use crate::cache;
use crate::cli::InstallArgs;
use crate::common::display_utils::{format_size, print_error};
use crate::config::Layout;
use crate::error::{Result, resolve};
use crate::fetch::{Fetch, HttpFetcher};
use crate::index::PackageDatabase;
use crate::installer::{InstalledArtifact, Installer};
use crate::resolver::{self, InstallRequest, Resolution};

/// Run install command
pub fn run(layout: &Layout, args: &InstallArgs) -> Result<()> {
    let request = InstallRequest::from_args(&args.packages)?;
    tracing::debug!(names = ?request.names(), tag = %request.tag(), "install request");
    let database = PackageDatabase::load(&layout.database_path())?;
    let cache_dir = cache::ensure_cache_dir()?;
    let fetcher = HttpFetcher::new()?;

    install(&database, &request, &fetcher, &cache_dir).map(|_| ())
}

/// Resolve and install every name of `request`.
///
/// Names that are missing or fail to download are reported one by one; the
/// remaining names are still installed and the call fails at the end.
pub(crate) fn install(
    database: &PackageDatabase,
    request: &InstallRequest,
    fetcher: &dyn Fetch,
    cache_dir: &Path,
) -> Result<Vec<InstalledArtifact>> {
    let resolutions = resolver::resolve(database, request)?;
    let installer = Installer::new(fetcher, cache_dir);

    let green = Style::new().green().bold();
    let dim = Style::new().dim();

    let mut installed = Vec::new();
    let mut failed = Vec::new();
    for resolution in resolutions {
        match resolution {
            Resolution::Found { key, url } => match installer.install(&key, &url) {
                Ok(artifact) => {
                    println!(
                        "{} {} ({})",
                        green.apply_to("Installed:"),
                        artifact.key,
                        format_size(artifact.size)
                    );
                    println!("  {}", dim.apply_to(artifact.path.display()));
                    println!("  {}", dim.apply_to(&artifact.digest));
                    installed.push(artifact);
                }
                Err(error) => {
                    print_error(&error.to_string());
                    failed.push(key.name);
                }
            },
            Resolution::Missing { key } => {
                print_error(&resolve::not_found(&key.name, &key.tag).to_string());
                failed.push(key.name);
            }
        }
    }

    if !failed.is_empty() {
        return Err(resolve::install_incomplete(&failed));
    }

    Ok(installed)
}
