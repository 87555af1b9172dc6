//! Host identity: which app package is running, and at what version.

use crate::error::{Result, ShelfError};

/// Reports the identity of the app hosting this code.
///
/// Either lookup may fail; callers absorb failures.
pub trait HostIdentity {
    /// Package id of the running app.
    fn package_id(&self) -> Result<String>;

    /// Native version string of the running app, if it reports one.
    fn native_version(&self) -> Result<Option<String>>;
}

/// Host identity from fixed values, e.g. CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHost {
    package_id: Option<String>,
    version: Option<String>,
}

impl StaticHost {
    pub fn new(package_id: impl Into<String>, version: Option<String>) -> Self {
        Self {
            package_id: Some(package_id.into()),
            version,
        }
    }

    /// A host that cannot report its package id.
    pub fn unknown() -> Self {
        Self::default()
    }
}

impl HostIdentity for StaticHost {
    fn package_id(&self) -> Result<String> {
        self.package_id
            .clone()
            .ok_or_else(|| ShelfError::HostIdentity {
                message: "no package id reported".to_string(),
            })
    }

    fn native_version(&self) -> Result<Option<String>> {
        Ok(self.version.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_host_reports_values() {
        let host = StaticHost::new("com.asena.space", Some("1.6.3".to_string()));
        assert_eq!(host.package_id().unwrap(), "com.asena.space");
        assert_eq!(host.native_version().unwrap().as_deref(), Some("1.6.3"));
    }

    #[test]
    fn unknown_host_fails_package_lookup() {
        let host = StaticHost::unknown();
        assert!(matches!(
            host.package_id(),
            Err(ShelfError::HostIdentity { .. })
        ));
        assert_eq!(host.native_version().unwrap(), None);
    }
}
