//! Configuration file discovery and loading.
//!
//! Resolution order:
//! 1. An explicit path (`--config`), which must exist
//! 2. User global config (`~/.shelf/config.yml`) when present
//! 3. Built-in defaults

use crate::config::schema::CatalogConfig;
use crate::error::{Result, ShelfError};
use std::fs;
use std::path::{Path, PathBuf};

/// Find user's global config at ~/.shelf/config.yml
pub fn find_user_global() -> Option<PathBuf> {
    let path = dirs::home_dir()?.join(".shelf").join("config.yml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into CatalogConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CatalogConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShelfError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShelfError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into CatalogConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CatalogConfig> {
    if content.trim().is_empty() {
        return Ok(CatalogConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ShelfError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration, honoring an explicit path first.
pub fn load_config(explicit: Option<&Path>) -> Result<CatalogConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match find_user_global() {
        Some(path) => {
            tracing::debug!("Loading user config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(CatalogConfig::default()),
    }
}
