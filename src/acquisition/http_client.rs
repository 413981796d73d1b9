//! HTTP fetching for results pages.

use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// User agent sent with every request.
const USER_AGENT: &str = concat!("votegrep/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// Errors from fetching a page over HTTP.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// A fetched page.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    /// URL after redirects, which may differ from the request URL.
    pub final_url: String,
    pub body: String,
}

/// Thin reqwest wrapper carrying the defaults every fetch shares.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// Build a client with the crate user agent and a bounded redirect
    /// policy.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(Duration::from_millis(DEFAULT_TIMEOUT_MS))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` with a per-request timeout, returning the body text.
    ///
    /// Redirects are followed first; any remaining non-2xx status is an
    /// error.
    pub async fn get(&self, url: &str, timeout_ms: u64) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_millis(timeout_ms))
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;
        debug!(url = url, status = status, bytes = body.len() as u64, "fetched page");

        Ok(HttpResponse {
            status,
            final_url,
            body,
        })
    }
}
