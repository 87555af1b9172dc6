//! Status command implementation.
//!
//! The `shelf status <target>` command evaluates whether a package is the
//! running host app and, given a latest version, whether it needs an update.

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::config::CatalogConfig;
use crate::error::{Result, ShelfError};
use crate::install::{has_update, InstallationEvaluator, InstallationState, StaticHost};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport<'a> {
    package: &'a str,
    #[serde(flatten)]
    state: &'a InstallationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    latest_version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_update: Option<bool>,
}

/// The status command implementation.
pub struct StatusCommand {
    config: CatalogConfig,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(config: CatalogConfig, args: StatusArgs) -> Self {
        Self { config, args }
    }

    fn host(&self) -> StaticHost {
        match &self.args.host.host_package {
            Some(package) => StaticHost::new(package.clone(), self.args.host.host_version.clone()),
            None => StaticHost::unknown(),
        }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let package = self.config.resolve_target(&self.args.target);
        let evaluator = InstallationEvaluator::new(&self.config);
        let state = evaluator.check_host(&self.host(), package);

        let latest = self.args.latest.as_deref();
        let update = latest.map(|latest| {
            state
                .installed_version
                .as_deref()
                .is_some_and(|installed| has_update(installed, latest))
        });

        if self.args.json {
            let report = StatusReport {
                package,
                state: &state,
                latest_version: latest,
                has_update: update,
            };
            let json =
                serde_json::to_string_pretty(&report).map_err(|e| ShelfError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if self.args.host.host_package.is_none() {
            ui.warning("No host package given (--host-package); nothing can be installed");
        }

        if !state.is_installed {
            ui.message(&format!("{} is not installed", package));
            return Ok(CommandResult::success());
        }

        let version = state
            .installed_version
            .as_deref()
            .unwrap_or("unknown version");
        ui.success(&format!("{} is installed ({})", package, version));

        match (update, latest) {
            (Some(true), Some(latest)) => {
                ui.warning(&format!("Update available: {} → {}", version, latest))
            }
            (Some(false), Some(latest)) => ui.message(&format!("Up to date with {}", latest)),
            _ => {}
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::HostArgs;
    use crate::ui::MockUI;

    fn args(target: &str, host: Option<&str>, version: Option<&str>, latest: Option<&str>) -> StatusArgs {
        StatusArgs {
            target: target.to_string(),
            host: HostArgs {
                host_package: host.map(str::to_string),
                host_version: version.map(str::to_string),
            },
            latest: latest.map(str::to_string),
            json: false,
        }
    }

    fn run(args: StatusArgs) -> MockUI {
        let mut ui = MockUI::new();
        StatusCommand::new(CatalogConfig::default(), args)
            .execute(&mut ui)
            .unwrap();
        ui
    }

    #[test]
    fn display_name_resolves_through_package_table() {
        let ui = run(args("Asedia Pro", Some("com.asena.pro"), Some("1.0.0"), None));
        assert!(ui.successes()[0].contains("com.asena.pro is installed (1.0.0)"));
    }

    #[test]
    fn sandbox_flagship_reports_development_version() {
        let ui = run(args("com.asena.space", Some("host.exp.exponent"), Some("9.0.0"), None));
        assert!(ui.successes()[0].contains("(1.6.3)"));
    }

    #[test]
    fn other_host_is_not_installed() {
        let ui = run(args("com.asena.lite", Some("com.asena.pro"), Some("1.0.0"), None));
        assert!(ui.has_message("com.asena.lite is not installed"));
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn reports_available_update() {
        let ui = run(args("Asedia", Some("com.asena.space"), Some("1.5.9"), Some("1.6.0")));
        assert!(ui.warnings().iter().any(|w| w.contains("1.5.9 → 1.6.0")));
    }

    #[test]
    fn reports_up_to_date_with_edition_suffix() {
        let ui = run(args(
            "Asedia",
            Some("com.asena.space"),
            Some("1.6.3"),
            Some("1.6.3 (Special Edition)"),
        ));
        assert!(ui.has_message("Up to date"));
        assert!(ui.warnings().is_empty());
    }

    #[test]
    fn missing_host_warns_and_reports_not_installed() {
        let ui = run(args("Asedia", None, None, None));
        assert_eq!(ui.warnings().len(), 1);
        assert!(ui.has_message("com.asena.space is not installed"));
    }

    #[test]
    fn json_report() {
        let mut status_args = args("Asedia", Some("com.asena.space"), Some("2.1.0"), Some("2.0.0"));
        status_args.json = true;
        let ui = run(status_args);

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed["package"], "com.asena.space");
        assert_eq!(parsed["isInstalled"], true);
        assert_eq!(parsed["installedVersion"], "2.1.0");
        assert_eq!(parsed["latestVersion"], "2.0.0");
        assert_eq!(parsed["hasUpdate"], false);
    }
}
