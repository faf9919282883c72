//! Command implementations for xpt CLI

pub mod cache;
pub mod completions;
pub mod install;
pub mod list;
pub mod update;
pub mod version;
