//! Configuration loading for shelf.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use shelf::config::CatalogConfig;
//!
//! let config = CatalogConfig::default();
//! assert_eq!(config.derived_package_name("Asedia"), "com.asena.asedia");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_user_global, load_config, load_config_file, parse_config};
pub use schema::{CatalogConfig, FallbackText};
