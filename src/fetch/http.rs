//! HTTP(S) and `file://` fetcher

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use reqwest::Url;
use reqwest::blocking::{Client, Response};

use super::{Fetch, Transfer};
use crate::error::{Result, fetch};

const FILE_SCHEME: &str = "file";

/// Fetcher backed by a blocking `reqwest` client.
///
/// `file://` URLs are served from the local filesystem so repositories can be
/// mirrored on disk.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with default transport settings
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("xpt/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch::failed(url, e))?;

        if !response.status().is_success() {
            return Err(fetch::failed(url, format!("HTTP {}", response.status())));
        }

        Ok(response)
    }
}

/// Local path for a `file://` URL, `None` for any other scheme.
///
/// Percent-encoding is decoded and a `localhost` host is accepted; any other
/// host cannot be mapped to a local path and fails.
fn local_path(url: &str) -> Result<Option<PathBuf>> {
    match Url::parse(url) {
        Ok(parsed) if parsed.scheme() == FILE_SCHEME => parsed
            .to_file_path()
            .map(Some)
            .map_err(|()| fetch::failed(url, "not a local file path")),
        _ => Ok(None),
    }
}

impl Fetch for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "fetching text");

        if let Some(path) = local_path(url)? {
            let bytes = std::fs::read(path).map_err(|e| fetch::failed(url, e))?;
            return Ok(String::from_utf8_lossy(&bytes).into_owned());
        }

        self.get(url)?.text().map_err(|e| fetch::failed(url, e))
    }

    fn download(&self, url: &str, dest: &mut dyn Write) -> Result<Transfer> {
        tracing::debug!(%url, "downloading");

        if let Some(path) = local_path(url)? {
            let mut file = File::open(path).map_err(|e| fetch::failed(url, e))?;
            let expected = file.metadata().ok().map(|m| m.len());
            let bytes = io::copy(&mut file, dest).map_err(|e| fetch::failed(url, e))?;
            return Ok(Transfer { bytes, expected });
        }

        let mut response = self.get(url)?;
        let expected = response.content_length();
        let bytes = io::copy(&mut response, dest).map_err(|e| fetch::failed(url, e))?;

        Ok(Transfer { bytes, expected })
    }
}
