//! Cache statistics
//!
//! Read-only views over the cache directory. Nothing here removes or expires
//! entries.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::common::display_utils::format_size;
use crate::error::{Result, cache};

use super::SOURCE_FILE;

/// A package entry found in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedPackage {
    pub tag: String,
    pub name: String,
    /// Number of artifact files in the entry
    pub artifacts: usize,
    /// Total size in bytes
    pub size: u64,
}

impl CachedPackage {
    /// Format size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.size)
    }
}

/// Cache statistics
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of package entries (`<tag>/<name>` directories)
    pub packages: usize,
    /// Number of artifact files
    pub artifacts: usize,
    /// Total size in bytes
    pub total_size: u64,
}

impl CacheStats {
    /// Format total size as human-readable string
    pub fn formatted_size(&self) -> String {
        format_size(self.total_size)
    }
}

/// List package entries under `cache_dir`, sorted by tag then name.
///
/// Entry directories without any artifact are not packages and are skipped.
pub fn list_cached_packages(cache_dir: &Path) -> Result<Vec<CachedPackage>> {
    if !cache_dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut packages = Vec::new();
    for tag_dir in subdirectories(cache_dir)? {
        let tag = file_name(&tag_dir);
        for entry_dir in subdirectories(&tag_dir)? {
            let (artifacts, size) = artifact_totals(&entry_dir);
            if artifacts == 0 {
                continue;
            }
            packages.push(CachedPackage {
                tag: tag.clone(),
                name: file_name(&entry_dir),
                artifacts,
                size,
            });
        }
    }

    packages.sort_by(|a, b| a.tag.cmp(&b.tag).then_with(|| a.name.cmp(&b.name)));
    Ok(packages)
}

/// Get cache statistics for `cache_dir`
pub fn cache_stats(cache_dir: &Path) -> Result<CacheStats> {
    let packages = list_cached_packages(cache_dir)?;
    Ok(CacheStats {
        packages: packages.len(),
        artifacts: packages.iter().map(|p| p.artifacts).sum(),
        total_size: packages.iter().map(|p| p.size).sum(),
    })
}

fn subdirectories(path: &Path) -> Result<Vec<std::path::PathBuf>> {
    let entries = fs::read_dir(path).map_err(|e| {
        cache::operation_failed(format!("Failed to read {}: {e}", path.display()))
    })?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| cache::operation_failed(format!("Failed to read entry: {e}")))?;
        if entry.path().is_dir() {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Count artifact files and their total size, skipping bookkeeping files
fn artifact_totals(path: &Path) -> (usize, u64) {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file() && e.file_name() != OsStr::new(SOURCE_FILE))
        .fold((0, 0), |(count, size), e| {
            (count + 1, size + e.metadata().map(|m| m.len()).unwrap_or(0))
        })
}
