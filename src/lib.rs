//! Shelf - app catalog client for the Asedia family of apps.
//!
//! Shelf resolves catalog entries from per-app `app.json` / `update.json`
//! documents hosted in GitHub repositories, fills gaps with defaults, and
//! decides whether each app is installed on the current host and whether
//! an update is available.
//!
//! # Modules
//!
//! - [`catalog`] - Descriptor resolution and catalog assembly
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and defaults
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Remote document fetching
//! - [`install`] - Installation state and version comparison
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use shelf::install::{has_update, InstallationEvaluator};
//! use shelf::config::CatalogConfig;
//!
//! let evaluator = InstallationEvaluator::new(&CatalogConfig::default());
//! let state = evaluator.check("host.exp.exponent", "com.asena.space", None);
//! assert_eq!(state.installed_version.as_deref(), Some("1.6.3"));
//! assert!(has_update("1.6.3", "1.7.0"));
//! ```
//!
//! For network-backed resolution, see the integration tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod install;
pub mod ui;

pub use error::{Result, ShelfError};
