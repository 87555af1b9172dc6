//! Shapes of the two remote documents.
//!
//! Only the keys the resolver reads are modeled; everything else in the
//! documents is ignored.

use serde::Deserialize;

/// `app.json`: the app's Expo manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestDocument {
    pub expo: Option<ExpoSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpoSection {
    pub name: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub splash: Option<SplashSection>,
    pub android: Option<AndroidSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplashSection {
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AndroidSection {
    pub package: Option<String>,
}

/// `update.json`: version and release-notes metadata.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDocument {
    /// Human-facing release title, shown as the description.
    pub version_name: Option<String>,
    pub version: Option<String>,
    pub package_name: Option<String>,
    pub download_url: Option<String>,
    pub update_notes: Option<Vec<String>>,
}

/// Treat empty strings the same as missing keys.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_reads_nested_expo_keys() {
        let json = r##"{
            "expo": {
                "name": "Asedia",
                "slug": "asedia",
                "version": "1.6.3",
                "splash": { "backgroundColor": "#000000", "resizeMode": "contain" },
                "android": { "package": "com.asena.space" }
            }
        }"##;
        let doc: ManifestDocument = serde_json::from_str(json).unwrap();
        let expo = doc.expo.unwrap();

        assert_eq!(expo.name.as_deref(), Some("Asedia"));
        assert_eq!(expo.version.as_deref(), Some("1.6.3"));
        assert_eq!(
            expo.splash.unwrap().background_color.as_deref(),
            Some("#000000")
        );
        assert_eq!(expo.android.unwrap().package.as_deref(), Some("com.asena.space"));
    }

    #[test]
    fn update_reads_camel_case_keys() {
        let json = r#"{
            "version": "1.6.4",
            "versionName": "Kış güncellemesi",
            "packageName": "com.asena.space",
            "downloadUrl": "https://example.com/a.apk",
            "updateNotes": ["Hız iyileştirmeleri", "Hata düzeltmeleri"]
        }"#;
        let doc: UpdateDocument = serde_json::from_str(json).unwrap();

        assert_eq!(doc.version.as_deref(), Some("1.6.4"));
        assert_eq!(doc.version_name.as_deref(), Some("Kış güncellemesi"));
        assert_eq!(doc.package_name.as_deref(), Some("com.asena.space"));
        assert_eq!(doc.update_notes.unwrap().len(), 2);
    }

    #[test]
    fn empty_objects_parse() {
        let manifest: ManifestDocument = serde_json::from_str("{}").unwrap();
        let update: UpdateDocument = serde_json::from_str("{}").unwrap();
        assert!(manifest.expo.is_none());
        assert!(update.version.is_none());
    }

    #[test]
    fn present_drops_empty_strings() {
        assert_eq!(present(Some("x".into())), Some("x".into()));
        assert_eq!(present(Some("".into())), None);
        assert_eq!(present(None), None);
    }
}
