//! Installation state evaluation.

use serde::{Deserialize, Serialize};

use super::host::HostIdentity;
use crate::config::CatalogConfig;
use crate::error::Result;

/// Whether a target package is the one running on this host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationState {
    pub is_installed: bool,
    /// Only set when installed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed_version: Option<String>,
}

impl InstallationState {
    pub fn not_installed() -> Self {
        Self::default()
    }

    pub fn installed(version: Option<&str>) -> Self {
        Self {
            is_installed: true,
            installed_version: version.map(str::to_string),
        }
    }
}

/// Decides [`InstallationState`] for target packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallationEvaluator {
    sandbox_package_id: String,
    flagship_package_id: String,
    development_version: String,
}

impl InstallationEvaluator {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            sandbox_package_id: config.sandbox_package_id.clone(),
            flagship_package_id: config.flagship_package_id.clone(),
            development_version: config.development_version.clone(),
        }
    }

    /// Evaluate `target_package_id` against the host's identity.
    ///
    /// Inside the development harness only the flagship counts as
    /// installed, at the development version. Otherwise the target is
    /// installed iff it is the host itself.
    pub fn check(
        &self,
        host_package_id: &str,
        target_package_id: &str,
        host_version: Option<&str>,
    ) -> InstallationState {
        if host_package_id == self.sandbox_package_id {
            if target_package_id == self.flagship_package_id {
                return InstallationState::installed(Some(self.development_version.as_str()));
            }
            return InstallationState::not_installed();
        }

        if host_package_id != target_package_id {
            return InstallationState::not_installed();
        }

        InstallationState::installed(host_version.filter(|v| !v.is_empty()))
    }

    /// Evaluate `target_package_id` against a live host.
    ///
    /// Lookup failures are logged and reported as not installed.
    pub fn check_host(&self, host: &dyn HostIdentity, target_package_id: &str) -> InstallationState {
        match self.try_check_host(host, target_package_id) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Error checking app installation: {}", e);
                InstallationState::not_installed()
            }
        }
    }

    fn try_check_host(
        &self,
        host: &dyn HostIdentity,
        target_package_id: &str,
    ) -> Result<InstallationState> {
        let host_package_id = host.package_id()?;
        tracing::debug!("Current package: {}", host_package_id);

        // Version is only looked up when it would be reported.
        let host_version = if host_package_id == target_package_id
            && host_package_id != self.sandbox_package_id
        {
            host.native_version()?
        } else {
            None
        };

        let state = self.check(&host_package_id, target_package_id, host_version.as_deref());
        tracing::debug!(
            "{} installed: {} ({:?})",
            target_package_id,
            state.is_installed,
            state.installed_version
        );
        Ok(state)
    }
}
