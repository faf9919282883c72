//! Artifact installation
//!
//! Places resolved artifacts into the cache:
//! 1. Create `<cache>/<tag>/<name>/`
//! 2. Stream the artifact into a temp file in that directory
//! 3. Check the byte count against the length the source advertised
//! 4. Move the temp file over `<filename>` and record where it came from
//! 5. Hash the placed file
//!
//! A failed transfer leaves no partial artifact behind, and directories created
//! for it are removed again. Archives are not unpacked; the artifact is stored
//! as served.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::cache;
use crate::error::{Result, fetch, fs};
use crate::fetch::Fetch;
use crate::hash;
use crate::index::PackageKey;
use crate::path_utils;

/// An artifact placed in the cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledArtifact {
    pub key: PackageKey,
    pub url: String,
    pub path: PathBuf,
    pub size: u64,
    /// BLAKE3 digest of the placed file
    pub digest: String,
}

/// Downloads resolved artifacts into a cache directory
pub struct Installer<'a, F: Fetch + ?Sized> {
    fetcher: &'a F,
    cache_dir: PathBuf,
}

impl<'a, F: Fetch + ?Sized> Installer<'a, F> {
    pub fn new(fetcher: &'a F, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            cache_dir: cache_dir.into(),
        }
    }

    /// Download `url` and place it under the entry for `key`
    pub fn install(&self, key: &PackageKey, url: &str) -> Result<InstalledArtifact> {
        let entry_dir = cache::entry_path(&self.cache_dir, key);
        let created: Vec<PathBuf> = entry_dir
            .ancestors()
            .take_while(|dir| *dir != self.cache_dir.as_path() && !dir.exists())
            .map(Path::to_path_buf)
            .collect();
        std::fs::create_dir_all(&entry_dir).map_err(|e| fs::create_dir_failed(&entry_dir, e))?;

        let result = self.place(key, url, &entry_dir);
        if result.is_err() {
            // Innermost first; stops at the first directory that is not empty
            for dir in &created {
                if std::fs::remove_dir(dir).is_err() {
                    break;
                }
            }
        }
        result
    }

    fn place(&self, key: &PackageKey, url: &str, entry_dir: &Path) -> Result<InstalledArtifact> {
        let file_name = path_utils::make_path_safe(
            path_utils::url_file_name(url).unwrap_or(key.name.as_str()),
        );
        let target = entry_dir.join(file_name);

        let mut temp =
            NamedTempFile::new_in(entry_dir).map_err(|e| fs::write_failed(&target, e))?;
        let transfer = self.fetcher.download(url, &mut temp)?;
        temp.flush().map_err(|e| fs::write_failed(&target, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| fs::write_failed(&target, e))?;

        if !transfer.is_complete() {
            return Err(fetch::integrity_failed(
                url,
                transfer.expected.unwrap_or(transfer.bytes),
                transfer.bytes,
            ));
        }

        temp.persist(&target)
            .map_err(|e| fs::write_failed(&target, e.error))?;

        let source_file = entry_dir.join(cache::SOURCE_FILE);
        std::fs::write(&source_file, format!("{url}\n"))
            .map_err(|e| fs::write_failed(&source_file, e))?;

        let digest = hash::hash_file(&target)?;
        tracing::debug!(
            package = %key,
            path = %target.display(),
            bytes = transfer.bytes,
            %digest,
            "placed artifact"
        );

        Ok(InstalledArtifact {
            key: key.clone(),
            url: url.to_string(),
            path: target,
            size: transfer.bytes,
            digest,
        })
    }
}
