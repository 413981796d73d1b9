//! Acquiring results pages — HTTP fetch or local file read.
//!
//! Everything here is fatal when it fails; the extraction core never
//! sees a page it couldn't load.

pub mod http_client;

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

pub use http_client::{FetchError, HttpClient, HttpResponse, DEFAULT_TIMEOUT_MS};

/// Where the results page HTML comes from.
#[derive(Debug, Clone)]
pub enum PageSource {
    /// Fetch over HTTP(S).
    Url(url::Url),
    /// Read from local storage.
    File(PathBuf),
}

/// Errors from loading a page source.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PageSource {
    /// Parse `--url` input, validating it up front.
    pub fn url(raw: &str) -> Result<Self, url::ParseError> {
        url::Url::parse(raw).map(Self::Url)
    }

    pub fn file(path: PathBuf) -> Self {
        Self::File(path)
    }

    /// The string recorded in the report's `source` field.
    pub fn describe(&self) -> String {
        match self {
            Self::Url(url) => url.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Load the page HTML.
    pub async fn load(
        &self,
        client: &HttpClient,
        timeout_ms: u64,
    ) -> Result<String, AcquireError> {
        match self {
            Self::Url(url) => {
                info!(url = %url, "fetching results page");
                let response = client.get(url.as_str(), timeout_ms).await?;
                Ok(response.body)
            }
            Self::File(path) => {
                info!(path = %path.display(), "reading results page");
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| AcquireError::File {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}
