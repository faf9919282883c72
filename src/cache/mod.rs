//! Artifact cache for xpt
//!
//! The cache is a plain directory where installed artifacts are placed. It is
//! only a location: there is no eviction, size limit or expiry.
//!
//! ## Cache Structure
//!
//! ```text
//! ~/xptcache/               ($XPTCACHE overrides)
//! └── <tag>/                (notag for untagged repositories)
//!     └── <name>/
//!         ├── <artifact filename>
//!         └── .xpt_source   (url the artifact came from)
//! ```

mod paths;
mod stats;

pub use paths::{SOURCE_FILE, cache_dir, ensure_cache_dir, entry_path};
pub use stats::{CacheStats, CachedPackage, cache_stats, list_cached_packages};
