//! URL construction for catalog assets.
//!
//! All per-app paths follow `{base}/{app}/main/{asset}`.

use crate::config::CatalogConfig;

/// Number of enumerated screenshot slots per app.
pub const SCREENSHOT_SLOTS: usize = 3;

/// Deterministic URL builder for one content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogUrls {
    base: String,
    repo_base: String,
}

impl CatalogUrls {
    /// Create a builder from explicit roots. Trailing slashes are dropped.
    pub fn new(base: &str, repo_base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            repo_base: repo_base.trim_end_matches('/').to_string(),
        }
    }

    /// Create a builder from the configured roots.
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(&config.base_url, &config.repo_base_url)
    }

    /// `{base}/{app}/main/{path}`
    pub fn asset(&self, app: &str, path: &str) -> String {
        format!("{}/{}/main/{}", self.base, app, path)
    }

    /// Manifest document (`app.json`).
    pub fn manifest(&self, app: &str) -> String {
        self.asset(app, "app.json")
    }

    /// Update document (`update.json`).
    pub fn update(&self, app: &str) -> String {
        self.asset(app, "update.json")
    }

    pub fn icon(&self, app: &str) -> String {
        self.asset(app, "assets/icon.png")
    }

    pub fn screenshots(&self, app: &str) -> Vec<String> {
        (1..=SCREENSHOT_SLOTS)
            .map(|slot| self.asset(app, &format!("assets/images/screenshot{slot}.png")))
            .collect()
    }

    /// Source repository link, also used as the install link.
    pub fn repo(&self, name: &str) -> String {
        format!("{}/{}", self.repo_base, name)
    }
}
