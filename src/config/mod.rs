//! Configuration handling for xpt
//!
//! This module contains:
//! - [`layout`] - Installation root and the paths derived from it
//! - [`sources`] - `sources.txt`, the repository list

pub mod layout;
pub mod sources;

// Re-export commonly used types
pub use layout::Layout;
pub use sources::{RepositoryDescriptor, load_sources, parse_sources};
