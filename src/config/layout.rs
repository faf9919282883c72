//! Installation layout
//!
//! xpt keeps its data under an installation root:
//!
//! ```text
//! <root>/
//! ├── etc/xpt/
//! │   ├── xpt              (the binary, by default)
//! │   └── sources.txt      (repository list)
//! └── var/xpt/
//!     └── update.txt       (package database)
//! ```
//!
//! The root is resolved once at startup and passed to every command.

use std::path::{Path, PathBuf};

use crate::error::{Result, config};

/// Repository list file name
pub const SOURCES_FILE: &str = "sources.txt";

/// Package database file name
pub const DATABASE_FILE: &str = "update.txt";

/// Paths derived from an installation root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the layout from an explicit root, or else from the location of
    /// the running binary.
    pub fn resolve(explicit_root: Option<PathBuf>) -> Result<Self> {
        if let Some(root) = explicit_root {
            return Ok(Self::new(root));
        }

        let exe = std::env::current_exe()
            .map_err(|e| config::root_unavailable(format!("cannot locate executable: {e}")))?;
        Self::from_executable(&exe)
    }

    /// Root two levels above the directory holding `exe`
    /// (`<root>/etc/xpt/xpt` gives `<root>`).
    pub fn from_executable(exe: &Path) -> Result<Self> {
        exe.ancestors()
            .nth(3)
            .filter(|root| !root.as_os_str().is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                config::root_unavailable(format!(
                    "{} is not nested two directories below a root",
                    exe.display()
                ))
            })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/etc/xpt/sources.txt`
    pub fn sources_path(&self) -> PathBuf {
        self.root.join("etc").join("xpt").join(SOURCES_FILE)
    }

    /// `<root>/var/xpt/update.txt`
    pub fn database_path(&self) -> PathBuf {
        self.root.join("var").join("xpt").join(DATABASE_FILE)
    }
}
