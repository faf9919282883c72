//! Manifest and artifact retrieval
//!
//! The [`Fetch`] trait is the only I/O boundary between the index and install
//! pipelines and the network. [`HttpFetcher`] is the real implementation; tests
//! drive the pipelines with an in-memory fetcher instead.
//!
//! Every call blocks until the transfer completes or fails. There is no retry,
//! no timeout override and no authentication.

mod http;

use std::io::Write;

use crate::error::Result;

pub use http::HttpFetcher;

/// Outcome of streaming a body into a writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    /// Bytes actually written
    pub bytes: u64,
    /// Length the source advertised up front, when it did
    pub expected: Option<u64>,
}

impl Transfer {
    /// Whether the written byte count agrees with the advertised length
    pub fn is_complete(&self) -> bool {
        self.expected.is_none_or(|expected| expected == self.bytes)
    }
}

/// Blocking retrieval of remote content by URL
pub trait Fetch {
    /// Retrieve the body at `url` decoded as text
    fn fetch_text(&self, url: &str) -> Result<String>;

    /// Stream the body at `url` into `dest`
    fn download(&self, url: &str, dest: &mut dyn Write) -> Result<Transfer>;
}
