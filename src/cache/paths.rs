//! Cache path utilities and constants
//!
//! This module resolves the cache root and the per-package entry directories
//! inside it.

use std::path::{Path, PathBuf};

use crate::error::{Result, cache, fs};
use crate::index::PackageKey;
use crate::path_utils;

/// Environment variable overriding the cache location
pub const CACHE_ENV: &str = "XPTCACHE";

/// Default cache directory name under the user's home directory
const CACHE_DIR: &str = "xptcache";

/// File recording the source URL next to a placed artifact
pub const SOURCE_FILE: &str = ".xpt_source";

/// Get the cache directory path
///
/// Uses `$XPTCACHE` when set and non-empty, otherwise `~/xptcache`.
pub fn cache_dir() -> Result<PathBuf> {
    if let Some(cache_dir) = std::env::var_os(CACHE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(cache_dir));
    }

    let home = dirs::home_dir()
        .ok_or_else(|| cache::operation_failed("Could not determine home directory"))?;

    Ok(home.join(CACHE_DIR))
}

/// Get the cache directory path, creating it if it does not exist yet
pub fn ensure_cache_dir() -> Result<PathBuf> {
    let dir = cache_dir()?;
    if !dir.is_dir() {
        std::fs::create_dir_all(&dir).map_err(|e| fs::create_dir_failed(&dir, e))?;
        tracing::debug!(path = %dir.display(), "created cache directory");
    }
    Ok(dir)
}

/// Entry directory for a package: `<cache>/<tag>/<name>`
pub fn entry_path(cache_dir: &Path, key: &PackageKey) -> PathBuf {
    cache_dir
        .join(path_utils::make_path_safe(key.tag.as_str()))
        .join(path_utils::make_path_safe(&key.name))
}
