//! HTTP document fetching.

use reqwest::blocking::Client;
use std::time::Duration;

use super::{DocumentFetcher, FetchResponse};
use crate::error::{Result, ShelfError};

/// Fetches documents over HTTP/HTTPS with a blocking client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("shelf/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ShelfError::Other(anyhow::anyhow!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl DocumentFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ShelfError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let content = response.text().map_err(|e| ShelfError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(FetchResponse {
            url: url.to_string(),
            status,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn default_timeout_is_30_seconds() {
        let fetcher = HttpFetcher::new().unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn custom_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn fetch_returns_body_and_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Asedia/main/app.json");
            then.status(200).body(r#"{"expo":{"name":"Asedia"}}"#);
        });

        let fetcher = HttpFetcher::new().unwrap();
        let response = fetcher.fetch(&server.url("/Asedia/main/app.json")).unwrap();

        assert!(response.is_success());
        assert_eq!(response.status, 200);
        assert_eq!(response.json().unwrap()["expo"]["name"], "Asedia");
    }

    #[test]
    fn fetch_keeps_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing.json");
            then.status(404).body("Not Found");
        });

        let fetcher = HttpFetcher::new().unwrap();
        let response = fetcher.fetch(&server.url("/missing.json")).unwrap();

        assert!(!response.is_success());
        assert_eq!(response.status, 404);
    }

    #[test]
    fn fetch_unreachable_host_is_transport_error() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2)).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/app.json");
        assert!(matches!(result, Err(ShelfError::Transport { .. })));
    }
}
