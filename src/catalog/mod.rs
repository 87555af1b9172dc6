//! App catalog: descriptor resolution and assembly.
//!
//! - [`urls`] - deterministic asset and document URLs
//! - [`descriptor`] - the resolved [`AppDescriptor`] record
//! - [`documents`] - remote `app.json` / `update.json` shapes
//! - [`resolver`] - fetch, merge, fall back
//! - [`entry`] - remote vs. static catalog entries
//! - [`status`] - GET / installed / update decision
//!
//! # Example
//!
//! ```
//! use shelf::catalog::{default_entries, CatalogEntry};
//! use shelf::config::CatalogConfig;
//!
//! let entries = default_entries(&CatalogConfig::default());
//! assert_eq!(entries.len(), 4);
//! assert!(matches!(entries[0], CatalogEntry::Remote { .. }));
//! ```

pub mod descriptor;
pub mod documents;
pub mod entry;
pub mod resolver;
pub mod status;
pub mod urls;

pub use descriptor::AppDescriptor;
pub use entry::{
    default_entries, lite_edition, pro_edition, CatalogEntry, APPS_LISTING, FLAGSHIP_APP,
};
pub use resolver::DescriptorResolver;
pub use status::AppStatus;
pub use urls::CatalogUrls;

use std::thread;

use crate::config::CatalogConfig;
use crate::fetch::DocumentFetcher;

/// An ordered set of entries and the resolver that fills them in.
#[derive(Debug, Clone)]
pub struct Catalog<F> {
    resolver: DescriptorResolver<F>,
    entries: Vec<CatalogEntry>,
}

impl<F: DocumentFetcher> Catalog<F> {
    /// The shipped catalog for `config`.
    pub fn new(config: CatalogConfig, fetcher: F) -> Self {
        let entries = default_entries(&config);
        Self::with_entries(DescriptorResolver::new(config, fetcher), entries)
    }

    /// A catalog over explicit entries.
    pub fn with_entries(resolver: DescriptorResolver<F>, entries: Vec<CatalogEntry>) -> Self {
        Self { resolver, entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn resolver(&self) -> &DescriptorResolver<F> {
        &self.resolver
    }

    /// Resolve one entry.
    pub fn resolve_entry(&self, entry: &CatalogEntry) -> AppDescriptor {
        match entry {
            CatalogEntry::Remote { identifier, rating } => {
                let mut descriptor = self.resolver.resolve(identifier);
                descriptor.rating = *rating;
                descriptor
            }
            CatalogEntry::Static(descriptor) => (**descriptor).clone(),
        }
    }

    /// Whether `app` is the substitute for a remote entry that failed to load.
    pub fn is_fallback(&self, entry: &CatalogEntry, app: &AppDescriptor) -> bool {
        entry.is_remote() && *app == self.fallback_for(entry)
    }

    /// The descriptor shown for `entry` when it cannot be resolved.
    ///
    /// Remote entries keep their own rating.
    pub fn fallback_for(&self, entry: &CatalogEntry) -> AppDescriptor {
        match entry {
            CatalogEntry::Remote { identifier, rating } => {
                let mut fallback = self.resolver.fallback(identifier);
                fallback.rating = *rating;
                fallback
            }
            CatalogEntry::Static(descriptor) => (**descriptor).clone(),
        }
    }

    /// Resolve every entry, in entry order.
    ///
    /// Remote entries resolve concurrently. Each absorbs its own failure,
    /// so the result always has one descriptor per entry.
    pub fn resolve_all(&self) -> Vec<AppDescriptor> {
        tracing::debug!("Resolving {} catalog entries", self.entries.len());

        thread::scope(|s| {
            let pending: Vec<_> = self
                .entries
                .iter()
                .map(|entry| {
                    let handle = entry
                        .is_remote()
                        .then(|| s.spawn(move || self.resolve_entry(entry)));
                    (entry, handle)
                })
                .collect();

            pending
                .into_iter()
                .map(|(entry, handle)| match handle {
                    Some(handle) => handle.join().unwrap_or_else(|_| {
                        tracing::warn!("Resolution of {} panicked", entry.identifier());
                        self.fallback_for(entry)
                    }),
                    None => self.resolve_entry(entry),
                })
                .collect()
        })
    }
}
