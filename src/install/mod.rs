//! Installation state and update detection.
//!
//! This module provides:
//! - Host identity lookup ([`HostIdentity`])
//! - Installed/not-installed evaluation with the development-harness rule
//! - Version comparison against the latest catalog version

pub mod host;
pub mod state;
pub mod version;

pub use host::{HostIdentity, StaticHost};
pub use state::{InstallationEvaluator, InstallationState};
pub use version::has_update;
