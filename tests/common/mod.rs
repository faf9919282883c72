//! Common test utilities for xpt integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// An installation root plus a cache directory and a place for local
/// `file://` repositories, all inside one temporary directory
#[allow(dead_code)]
pub struct TestSandbox {
    /// Temporary directory
    pub temp: TempDir,
    /// Installation root handed to `--root`
    pub root: PathBuf,
    /// Value of `XPTCACHE`
    pub cache: PathBuf,
    /// Parent directory of local repositories
    pub repos: PathBuf,
}

#[allow(dead_code)]
impl TestSandbox {
    /// Create a new sandbox with an empty installation root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("sandbox");
        let cache = temp.path().join("xptcache");
        let repos = temp.path().join("repos");
        std::fs::create_dir_all(&root).expect("Failed to create root directory");
        std::fs::create_dir_all(&repos).expect("Failed to create repos directory");
        Self {
            temp,
            root,
            cache,
            repos,
        }
    }

    /// Command running the real xpt binary against this sandbox
    #[allow(deprecated)]
    pub fn xpt(&self) -> Command {
        let mut cmd = Command::cargo_bin("xpt").expect("Failed to find xpt binary");
        cmd.arg("--root")
            .arg(&self.root)
            .env("XPTCACHE", &self.cache)
            .env_remove("XPT_ROOT")
            .env_remove("XPT_LOG");
        cmd
    }

    /// Base URL of the local repository `name`
    pub fn repo_url(&self, name: &str) -> String {
        file_url(&self.repos.join(name))
    }

    /// Publish a manifest and its artifacts under `name`, optionally below `tag`.
    ///
    /// Each manifest line is written as an artifact whose body is the line itself.
    pub fn publish(&self, name: &str, tag: Option<&str>, manifest: &[&str]) -> String {
        let mut dir = self.repos.join(name);
        if let Some(tag) = tag {
            dir = dir.join(tag);
        }
        std::fs::create_dir_all(&dir).expect("Failed to create repository directory");

        let mut content = String::new();
        for entry in manifest {
            content.push_str(entry);
            content.push('\n');
            std::fs::write(dir.join(entry), entry).expect("Failed to write artifact");
        }
        std::fs::write(dir.join("packages.txt"), content).expect("Failed to write manifest");

        self.repo_url(name)
    }

    /// Write `<root>/etc/xpt/sources.txt`
    pub fn write_sources(&self, content: &str) {
        let path = self.sources_path();
        std::fs::create_dir_all(path.parent().expect("sources path has a parent"))
            .expect("Failed to create etc/xpt");
        std::fs::write(path, content).expect("Failed to write sources.txt");
    }

    /// Write `<root>/var/xpt/update.txt` directly
    pub fn write_database(&self, content: &str) {
        let path = self.database_path();
        std::fs::create_dir_all(path.parent().expect("database path has a parent"))
            .expect("Failed to create var/xpt");
        std::fs::write(path, content).expect("Failed to write update.txt");
    }

    pub fn sources_path(&self) -> PathBuf {
        self.root.join("etc").join("xpt").join("sources.txt")
    }

    pub fn database_path(&self) -> PathBuf {
        self.root.join("var").join("xpt").join("update.txt")
    }

    /// Read the package database
    pub fn read_database(&self) -> String {
        std::fs::read_to_string(self.database_path()).expect("Failed to read update.txt")
    }

    /// Path of an installed artifact inside the cache
    pub fn cached(&self, tag: &str, name: &str, file: &str) -> PathBuf {
        self.cache.join(tag).join(name).join(file)
    }
}

impl Default for TestSandbox {
    fn default() -> Self {
        Self::new()
    }
}

/// `file://` URL for a local path
pub fn file_url(path: &Path) -> String {
    format!("file://{}", path.display())
}
