//! Descriptor resolution from remote documents.
//!
//! Fetches `app.json` and `update.json` for one app, merges them with the
//! configured defaults, and falls back to [`AppDescriptor::fallback`] on any
//! failure. Resolution never returns an error to the caller.

use std::thread;

use super::descriptor::AppDescriptor;
use super::documents::{present, ManifestDocument, UpdateDocument};
use super::urls::CatalogUrls;
use crate::config::CatalogConfig;
use crate::error::{Result, ShelfError};
use crate::fetch::{DocumentFetcher, FetchResponse};

/// Resolves [`AppDescriptor`]s through a [`DocumentFetcher`].
#[derive(Debug, Clone)]
pub struct DescriptorResolver<F> {
    config: CatalogConfig,
    urls: CatalogUrls,
    fetcher: F,
}

impl<F: DocumentFetcher> DescriptorResolver<F> {
    /// Create a resolver for the given configuration and transport.
    pub fn new(config: CatalogConfig, fetcher: F) -> Self {
        let urls = CatalogUrls::from_config(&config);
        Self {
            config,
            urls,
            fetcher,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn urls(&self) -> &CatalogUrls {
        &self.urls
    }

    /// Resolve the descriptor for `identifier`.
    ///
    /// Any transport error, non-success status on either document, or
    /// malformed body yields the fallback descriptor.
    pub fn resolve(&self, identifier: &str) -> AppDescriptor {
        match self.try_resolve(identifier) {
            Ok(descriptor) => {
                tracing::debug!(
                    "Resolved {} (version {}, package {})",
                    identifier,
                    descriptor.version,
                    descriptor.package_name
                );
                descriptor
            }
            Err(e) => {
                tracing::warn!("Error fetching app info for {}: {}", identifier, e);
                self.fallback(identifier)
            }
        }
    }

    /// The descriptor substituted when `identifier` cannot be resolved.
    pub fn fallback(&self, identifier: &str) -> AppDescriptor {
        AppDescriptor::fallback(identifier, &self.config)
    }

    fn try_resolve(&self, identifier: &str) -> Result<AppDescriptor> {
        let manifest_url = self.urls.manifest(identifier);
        let update_url = self.urls.update(identifier);

        // Both requests are in flight together; merging waits for both.
        let (manifest, update) = thread::scope(|s| {
            let manifest = s.spawn(|| self.fetcher.fetch(&manifest_url));
            let update = self.fetcher.fetch(&update_url);
            let manifest = manifest.join().unwrap_or_else(|_| {
                Err(ShelfError::Transport {
                    url: manifest_url.clone(),
                    message: "fetch thread panicked".to_string(),
                })
            });
            (manifest, update)
        });

        let manifest = ensure_success(manifest?)?;
        let update = ensure_success(update?)?;

        // A null manifest is malformed; a null update document is empty.
        let manifest = manifest.parse::<ManifestDocument>()?;
        let update = update.parse::<Option<UpdateDocument>>()?.unwrap_or_default();

        Ok(self.merge(identifier, manifest, update))
    }

    /// Combine both documents with defaults.
    ///
    /// Precedence per field: update document, then manifest, then default.
    fn merge(
        &self,
        identifier: &str,
        manifest: ManifestDocument,
        update: UpdateDocument,
    ) -> AppDescriptor {
        let config = &self.config;
        let expo = manifest.expo.unwrap_or_default();

        let update_notes = update
            .update_notes
            .filter(|notes| !notes.is_empty())
            .unwrap_or_else(|| vec![config.text.update_note.clone()]);

        let background_color = expo
            .splash
            .and_then(|splash| present(splash.background_color))
            .unwrap_or_else(|| config.default_background_color.clone());

        let package_name = present(update.package_name)
            .or_else(|| expo.android.and_then(|android| present(android.package)))
            .unwrap_or_else(|| config.derived_package_name(identifier));

        AppDescriptor {
            name: present(expo.name).unwrap_or_else(|| identifier.to_string()),
            description: present(update.version_name)
                .or_else(|| present(expo.description))
                .unwrap_or_else(|| config.text.description.clone()),
            icon: self.urls.icon(identifier),
            rating: config.default_rating,
            repo_url: self.urls.repo(identifier),
            long_description: update_notes.join("\n"),
            version: present(update.version)
                .or_else(|| present(expo.version))
                .unwrap_or_else(|| config.default_version.clone()),
            screenshots: self.urls.screenshots(identifier),
            developer: config.developer.clone(),
            background_color,
            package_name,
            download_url: present(update.download_url),
            update_notes,
        }
    }
}

fn ensure_success(response: FetchResponse) -> Result<FetchResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ShelfError::HttpStatus {
            url: response.url,
            status: response.status,
        })
    }
}
