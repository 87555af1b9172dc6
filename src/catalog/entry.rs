//! Catalog entries: fetched apps and fixed variant editions.

use super::descriptor::AppDescriptor;
use super::urls::CatalogUrls;
use crate::config::CatalogConfig;

/// Identifier of the flagship app; variant assets live under its content root.
pub const FLAGSHIP_APP: &str = "Asedia";

/// Identifier of the umbrella apps listing.
pub const APPS_LISTING: &str = "AsenaApps";

/// One slot in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEntry {
    /// Resolved from remote documents on every load.
    Remote { identifier: String, rating: f64 },
    /// Fixed descriptor, never fetched.
    Static(Box<AppDescriptor>),
}

impl CatalogEntry {
    /// Remote entry with the configured default rating.
    pub fn remote(identifier: &str, config: &CatalogConfig) -> Self {
        Self::Remote {
            identifier: identifier.to_string(),
            rating: config.default_rating,
        }
    }

    /// Name used in logs and for the fallback of a remote entry.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Remote { identifier, .. } => identifier,
            Self::Static(descriptor) => &descriptor.name,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}

/// The shipped catalog, in display order.
pub fn default_entries(config: &CatalogConfig) -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::remote(APPS_LISTING, config),
        CatalogEntry::remote(FLAGSHIP_APP, config),
        CatalogEntry::Static(Box::new(pro_edition(config))),
        CatalogEntry::Static(Box::new(lite_edition(config))),
    ]
}

/// Fields that differ between the two variant editions.
struct Edition {
    name: &'static str,
    description: &'static str,
    long_description: &'static str,
    repo: &'static str,
    asset_prefix: &'static str,
    rating: f64,
}

pub fn pro_edition(config: &CatalogConfig) -> AppDescriptor {
    edition(
        config,
        Edition {
            name: "Asedia Pro",
            description: "Premium Sürüm",
            long_description:
                "Asedia'nın premium sürümü. Daha fazla özellik ve daha fazla kontrol.",
            repo: "AsediaPro",
            asset_prefix: "pro",
            rating: 5.0,
        },
    )
}

pub fn lite_edition(config: &CatalogConfig) -> AppDescriptor {
    edition(
        config,
        Edition {
            name: "Asedia Lite",
            description: "Hafif Sürüm",
            long_description: "Asedia'nın hafif sürümü. Daha az kaynak kullanımı.",
            repo: "AsediaLite",
            asset_prefix: "lite",
            rating: 4.5,
        },
    )
}

fn edition(config: &CatalogConfig, edition: Edition) -> AppDescriptor {
    let urls = CatalogUrls::from_config(config);
    let image = |file: String| urls.asset(FLAGSHIP_APP, &format!("assets/images/{file}"));

    let package_name = config
        .package_for(edition.name)
        .map(str::to_string)
        .unwrap_or_else(|| config.derived_package_name(edition.repo));

    AppDescriptor {
        name: edition.name.to_string(),
        description: edition.description.to_string(),
        icon: image(format!("{}-icon.png", edition.asset_prefix)),
        rating: edition.rating,
        repo_url: urls.repo(edition.repo),
        long_description: edition.long_description.to_string(),
        version: config.default_version.clone(),
        screenshots: (1..=2)
            .map(|slot| image(format!("{}-screenshot{slot}.png", edition.asset_prefix)))
            .collect(),
        developer: config.developer.clone(),
        background_color: config.default_background_color.clone(),
        package_name,
        download_url: None,
        update_notes: vec![config.text.update_note.clone()],
    }
}
