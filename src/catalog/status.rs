//! The action a catalog entry offers, given its installation state.

use std::fmt;

use super::descriptor::AppDescriptor;
use crate::install::{has_update, InstallationState};

/// What the user can do with an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppStatus {
    /// Not installed on this host.
    Get,
    /// Installed and current. The version may be unknown.
    Installed { version: Option<String> },
    /// Installed and behind the catalog version.
    Update { installed: String, latest: String },
}

impl AppStatus {
    /// Decide the status of `descriptor` for a host in `state`.
    pub fn evaluate(descriptor: &AppDescriptor, state: &InstallationState) -> Self {
        if !state.is_installed {
            return Self::Get;
        }

        match &state.installed_version {
            Some(installed) if has_update(installed, &descriptor.version) => Self::Update {
                installed: installed.clone(),
                latest: descriptor.version.clone(),
            },
            version => Self::Installed {
                version: version.clone(),
            },
        }
    }

    /// Link to open for this status; installed-and-current has none.
    pub fn action_url<'a>(&self, descriptor: &'a AppDescriptor) -> Option<&'a str> {
        match self {
            Self::Get | Self::Update { .. } => Some(&descriptor.repo_url),
            Self::Installed { .. } => None,
        }
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Installed {
                version: Some(version),
            } => write!(f, "{}", version),
            Self::Installed { version: None } => write!(f, "Installed"),
            Self::Update { installed, latest } => write!(f, "Update ({} → {})", installed, latest),
        }
    }
}
