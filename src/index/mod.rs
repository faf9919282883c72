//! Package index: records, manifests, aggregation and the on-disk database
//!
//! ## Flow
//!
//! ```text
//! sources.txt ─► RepositoryDescriptor ─► ManifestSource (one per tag)
//!                                              │ fetch packages.txt
//!                                              ▼
//!                                         IndexRecord*
//!                                              │ append in order
//!                                              ▼
//!                                  PackageDatabase ─► var/xpt/update.txt
//! ```

pub mod aggregate;
pub mod database;
pub mod manifest;
pub mod record;

pub use aggregate::{AggregateReport, Aggregator};
pub use database::PackageDatabase;
pub use manifest::ManifestSource;
pub use record::{IndexRecord, PackageKey, Tag};
