//! Test fixtures and utilities for reducing test setup duplication.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{MemoryFetcher, create_temp_dir};
//!
//! #[test]
//! fn my_test() {
//!     let temp = create_temp_dir();
//!     let fetcher = MemoryFetcher::new()
//!         .with("http://example.test/repo/beta/packages.txt", "tool_1.0.tar\n");
//! }
//! ```

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use tempfile::TempDir;

use crate::error::{Result, fetch};
use crate::fetch::{Fetch, Transfer};

/// Create a temp directory in the system temp location.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// In-memory [`Fetch`] implementation serving fixed bodies by URL.
///
/// Unknown URLs fail the way an unreachable host would. Every requested URL
/// is recorded so tests can assert on traversal order.
#[derive(Default)]
pub struct MemoryFetcher {
    bodies: HashMap<String, Vec<u8>>,
    advertised: HashMap<String, u64>,
    requested: RefCell<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at `url`
    pub fn with(mut self, url: &str, body: impl AsRef<[u8]>) -> Self {
        self.bodies.insert(url.to_string(), body.as_ref().to_vec());
        self
    }

    /// Advertise a length for `url` that differs from its real body
    pub fn with_advertised_len(mut self, url: &str, len: u64) -> Self {
        self.advertised.insert(url.to_string(), len);
        self
    }

    /// URLs requested so far, in order
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }

    fn body(&self, url: &str) -> Result<&[u8]> {
        self.requested.borrow_mut().push(url.to_string());
        self.bodies
            .get(url)
            .map(Vec::as_slice)
            .ok_or_else(|| fetch::failed(url, "HTTP 404 Not Found"))
    }
}

impl Fetch for MemoryFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        Ok(String::from_utf8_lossy(self.body(url)?).into_owned())
    }

    fn download(&self, url: &str, dest: &mut dyn Write) -> Result<Transfer> {
        let body = self.body(url)?;
        dest.write_all(body)?;
        let bytes = body.len() as u64;
        let expected = Some(self.advertised.get(url).copied().unwrap_or(bytes));
        Ok(Transfer { bytes, expected })
    }
}
