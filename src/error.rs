//! Error types for shelf operations.
//!
//! This module defines [`ShelfError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Transport and host lookups return `ShelfError` so callers can tell a
//!   non-success status apart from a network failure
//! - Descriptor resolution and installation checks absorb these errors into
//!   fallback values; they only reach the user through config loading and the CLI
//! - Use `anyhow::Error` (via `ShelfError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Remote document answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus { url: String, status: u16 },

    /// Request never produced a response (DNS, connect, timeout, ...).
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Response body is not the JSON shape we expect.
    #[error("Malformed document at {url}: {message}")]
    MalformedDocument { url: String, message: String },

    /// The host could not report its package identity or version.
    #[error("Host identity unavailable: {message}")]
    HostIdentity { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ShelfError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ShelfError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn http_status_displays_code_and_url() {
        let err = ShelfError::HttpStatus {
            url: "https://example.com/app.json".into(),
            status: 404,
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("https://example.com/app.json"));
    }

    #[test]
    fn transport_displays_url_and_message() {
        let err = ShelfError::Transport {
            url: "https://example.com".into(),
            message: "connection refused".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn malformed_document_displays_message() {
        let err = ShelfError::MalformedDocument {
            url: "https://example.com/update.json".into(),
            message: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn host_identity_displays_message() {
        let err = ShelfError::HostIdentity {
            message: "no application id".into(),
        };
        assert!(err.to_string().contains("no application id"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShelfError = io_err.into();
        assert!(matches!(err, ShelfError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ShelfError::HostIdentity {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
