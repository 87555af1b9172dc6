//! Configuration schema definitions for shelf.
//!
//! Every field carries a default so an empty file, a partial file, or no
//! file at all produces a complete [`CatalogConfig`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration for the catalog client.
///
/// Passed by reference into the resolver, the catalog and the installation
/// evaluator. Nothing in the crate reads these values from globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Raw content root; documents live at `{base_url}/{app}/main/...`.
    pub base_url: String,

    /// Source repository root; repo links are `{repo_base_url}/{app}`.
    pub repo_base_url: String,

    /// Developer shown on every entry.
    pub developer: String,

    /// Prefix for derived package ids (`{prefix}{lowercase app}`).
    pub package_prefix: String,

    /// Version used when no document supplies one.
    pub default_version: String,

    /// Rating for dynamically resolved entries.
    pub default_rating: f64,

    /// Splash color used when the manifest omits one.
    pub default_background_color: String,

    /// Host package id that marks a development harness.
    pub sandbox_package_id: String,

    /// Package treated as installed inside the development harness.
    pub flagship_package_id: String,

    /// Version reported for the flagship inside the development harness.
    pub development_version: String,

    /// Per-request timeout for document fetches.
    pub timeout_secs: u64,

    /// Fallback strings.
    pub text: FallbackText,

    /// Display name to package id.
    pub package_names: BTreeMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://raw.githubusercontent.com/SiberizmDev".to_string(),
            repo_base_url: "https://github.com/SiberizmDev".to_string(),
            developer: "SiberizmDev".to_string(),
            package_prefix: "com.asena.".to_string(),
            default_version: "1.0.0".to_string(),
            default_rating: 5.0,
            default_background_color: "#101013".to_string(),
            sandbox_package_id: "host.exp.exponent".to_string(),
            flagship_package_id: "com.asena.space".to_string(),
            development_version: "1.6.3".to_string(),
            timeout_secs: 30,
            text: FallbackText::default(),
            package_names: default_package_names(),
        }
    }
}

impl CatalogConfig {
    /// Package id derived from an app identifier.
    pub fn derived_package_name(&self, identifier: &str) -> String {
        format!("{}{}", self.package_prefix, identifier.to_lowercase())
    }

    /// Look up a package id by display name.
    pub fn package_for(&self, display_name: &str) -> Option<&str> {
        self.package_names.get(display_name).map(String::as_str)
    }

    /// Resolve a CLI target: a known display name maps to its package,
    /// anything else is taken as a package id.
    pub fn resolve_target<'a>(&'a self, target: &'a str) -> &'a str {
        self.package_for(target).unwrap_or(target)
    }
}

/// User-facing strings substituted when remote data is missing or broken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackText {
    /// Description when the documents loaded but name none.
    pub description: String,

    /// Single release note when the documents loaded but list none.
    pub update_note: String,

    /// Description of the error descriptor.
    pub error_description: String,

    /// Long description of the error descriptor.
    pub error_long_description: String,

    /// Single release note of the error descriptor.
    pub error_update_note: String,
}

impl Default for FallbackText {
    fn default() -> Self {
        Self {
            description: "Yeni uygulama".to_string(),
            update_note: "Yeni sürüm yayınlandı!".to_string(),
            error_description: "Uygulama bilgileri yüklenirken bir hata oluştu".to_string(),
            error_long_description:
                "Uygulama bilgileri geçici olarak kullanılamıyor. Lütfen daha sonra tekrar deneyin."
                    .to_string(),
            error_update_note: "Uygulama bilgileri yüklenirken bir hata oluştu".to_string(),
        }
    }
}

fn default_package_names() -> BTreeMap<String, String> {
    [
        ("Asedia", "com.asena.space"),
        ("Asedia Pro", "com.asena.pro"),
        ("Asedia Lite", "com.asena.lite"),
        ("Asedia Dev Tools", "com.asena.devtools"),
    ]
    .into_iter()
    .map(|(name, package)| (name.to_string(), package.to_string()))
    .collect()
}
