//! Show command implementation.
//!
//! The `shelf show <identifier>` command resolves a single app.

use crate::catalog::DescriptorResolver;
use crate::cli::args::ShowArgs;
use crate::config::CatalogConfig;
use crate::error::{Result, ShelfError};
use crate::fetch::DocumentFetcher;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::render_app;

/// The show command implementation.
pub struct ShowCommand<F> {
    resolver: DescriptorResolver<F>,
    args: ShowArgs,
}

impl<F: DocumentFetcher> ShowCommand<F> {
    /// Create a new show command.
    pub fn new(config: CatalogConfig, fetcher: F, args: ShowArgs) -> Self {
        Self {
            resolver: DescriptorResolver::new(config, fetcher),
            args,
        }
    }
}

impl<F: DocumentFetcher> Command for ShowCommand<F> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let identifier = &self.args.identifier;
        let app = self.resolver.resolve(identifier);

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&app).map_err(|e| ShelfError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        ui.show_header(&app.name);
        render_app(ui, &app, None, true);

        if app == self.resolver.fallback(identifier) {
            ui.warning(&format!(
                "Could not load details for {}; showing defaults",
                identifier
            ));
        }

        Ok(CommandResult::success())
    }
}
