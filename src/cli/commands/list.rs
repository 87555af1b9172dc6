//! List command implementation.
//!
//! The `shelf list` command resolves the whole catalog and, when a host
//! package is given, shows each app's install status.

use serde::Serialize;

use crate::catalog::{AppDescriptor, AppStatus, Catalog};
use crate::cli::args::ListArgs;
use crate::config::CatalogConfig;
use crate::error::{Result, ShelfError};
use crate::fetch::DocumentFetcher;
use crate::install::{has_update, InstallationEvaluator, InstallationState, StaticHost};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render_app;

/// One row of `list --json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListedApp<'a> {
    #[serde(flatten)]
    app: &'a AppDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    installation: Option<&'a InstallationState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_update: Option<bool>,
}

/// The list command implementation.
pub struct ListCommand<F> {
    config: CatalogConfig,
    fetcher: F,
    args: ListArgs,
}

impl<F: DocumentFetcher> ListCommand<F> {
    /// Create a new list command.
    pub fn new(config: CatalogConfig, fetcher: F, args: ListArgs) -> Self {
        Self {
            config,
            fetcher,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn host(&self) -> Option<StaticHost> {
        self.args
            .host
            .host_package
            .as_ref()
            .map(|package| StaticHost::new(package.clone(), self.args.host.host_version.clone()))
    }
}

impl<F: DocumentFetcher> Command for ListCommand<F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let catalog = Catalog::new(self.config.clone(), &self.fetcher);
        let apps = catalog.resolve_all();

        let evaluator = InstallationEvaluator::new(&self.config);
        let host = self.host();
        let states: Vec<Option<InstallationState>> = apps
            .iter()
            .map(|app| {
                host.as_ref()
                    .map(|host| evaluator.check_host(host, &app.package_name))
            })
            .collect();

        if self.args.json {
            let listed: Vec<ListedApp> = apps
                .iter()
                .zip(&states)
                .map(|(app, state)| ListedApp {
                    app,
                    installation: state.as_ref(),
                    has_update: state.as_ref().map(|state| {
                        state
                            .installed_version
                            .as_deref()
                            .is_some_and(|installed| has_update(installed, &app.version))
                    }),
                })
                .collect();
            let json = serde_json::to_string_pretty(&listed)
                .map_err(|e| ShelfError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header("Asedia Apps");

        for ((entry, app), state) in catalog.entries().iter().zip(&apps).zip(&states) {
            let status = state.as_ref().map(|state| AppStatus::evaluate(app, state));
            render_app(ui, app, status.as_ref(), false);
            if catalog.is_fallback(entry, app) {
                ui.warning(&format!(
                    "Could not load details for {}; showing defaults",
                    entry.identifier()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
