//! The normalized per-app record.

use serde::{Deserialize, Serialize};

use super::urls::CatalogUrls;
use crate::config::CatalogConfig;

/// Resolved metadata for one catalog app.
///
/// Every field is always populated; only `download_url` is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDescriptor {
    /// Display name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Icon URL.
    pub icon: String,
    /// Star rating, assigned per catalog entry.
    pub rating: f64,
    /// Source and install link.
    pub repo_url: String,
    /// Release notes joined with newlines.
    pub long_description: String,
    /// Latest published version.
    pub version: String,
    /// Screenshot URLs in display order.
    pub screenshots: Vec<String>,
    pub developer: String,
    /// Splash background color.
    pub background_color: String,
    /// Platform package id.
    pub package_name: String,
    /// Direct download link, only when the update document names one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Release notes in display order.
    pub update_notes: Vec<String>,
}

impl AppDescriptor {
    /// The descriptor used when an app's documents cannot be loaded.
    ///
    /// Depends only on `identifier` and `config`, so two calls with the
    /// same inputs are equal field for field.
    pub fn fallback(identifier: &str, config: &CatalogConfig) -> Self {
        let urls = CatalogUrls::from_config(config);
        let text = &config.text;

        Self {
            name: identifier.to_string(),
            description: text.error_description.clone(),
            icon: urls.icon(identifier),
            rating: config.default_rating,
            repo_url: urls.repo(identifier),
            long_description: text.error_long_description.clone(),
            version: config.default_version.clone(),
            screenshots: urls.screenshots(identifier),
            developer: config.developer.clone(),
            background_color: config.default_background_color.clone(),
            package_name: config.derived_package_name(identifier),
            download_url: None,
            update_notes: vec![text.error_update_note.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_built_from_identifier() {
        let config = CatalogConfig::default();
        let d = AppDescriptor::fallback("Asedia", &config);

        assert_eq!(d.name, "Asedia");
        assert_eq!(d.description, "Uygulama bilgileri yüklenirken bir hata oluştu");
        assert_eq!(
            d.icon,
            "https://raw.githubusercontent.com/SiberizmDev/Asedia/main/assets/icon.png"
        );
        assert_eq!(d.repo_url, "https://github.com/SiberizmDev/Asedia");
        assert_eq!(d.version, "1.0.0");
        assert_eq!(d.rating, 5.0);
        assert_eq!(d.developer, "SiberizmDev");
        assert_eq!(d.package_name, "com.asena.asedia");
        assert_eq!(d.screenshots.len(), 3);
        assert_eq!(
            d.update_notes,
            vec!["Uygulama bilgileri yüklenirken bir hata oluştu".to_string()]
        );
        assert!(d.download_url.is_none());
    }

    #[test]
    fn fallback_is_reproducible() {
        let config = CatalogConfig::default();
        assert_eq!(
            AppDescriptor::fallback("AsenaApps", &config),
            AppDescriptor::fallback("AsenaApps", &config)
        );
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let d = AppDescriptor::fallback("Asedia", &CatalogConfig::default());
        let json = serde_json::to_value(&d).unwrap();

        assert_eq!(json["repoUrl"], "https://github.com/SiberizmDev/Asedia");
        assert_eq!(json["packageName"], "com.asena.asedia");
        assert!(json["updateNotes"].is_array());
        assert!(json.get("downloadUrl").is_none());
    }

    #[test]
    fn download_url_serialized_when_present() {
        let mut d = AppDescriptor::fallback("Asedia", &CatalogConfig::default());
        d.download_url = Some("https://example.com/asedia.apk".to_string());

        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["downloadUrl"], "https://example.com/asedia.apk");
    }
}
