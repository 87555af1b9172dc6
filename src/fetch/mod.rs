//! Remote document transport.
//!
//! The resolver only needs "fetch this URL, tell me whether it succeeded,
//! and let me read the body as JSON". [`DocumentFetcher`] is that seam;
//! [`HttpFetcher`] is the production implementation.

pub mod http;

pub use http::HttpFetcher;

use crate::error::{Result, ShelfError};

/// Anything that can fetch a document by URL.
///
/// Implementations return `Err` only when no response was obtained.
/// A response with a non-success status is still `Ok`.
pub trait DocumentFetcher: Send + Sync {
    /// Fetch the document at `url`.
    fn fetch(&self, url: &str) -> Result<FetchResponse>;
}

impl<T: DocumentFetcher + ?Sized> DocumentFetcher for &T {
    fn fetch(&self, url: &str) -> Result<FetchResponse> {
        (**self).fetch(url)
    }
}

/// Response from fetching a document.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The URL that was requested.
    pub url: String,
    /// HTTP status code.
    pub status: u16,
    /// Raw body.
    pub content: String,
}

impl FetchResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as untyped JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        self.parse()
    }

    /// Parse the body into a typed document.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.content).map_err(|e| ShelfError::MalformedDocument {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }
}
