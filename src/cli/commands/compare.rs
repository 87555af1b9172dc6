//! Compare command implementation.
//!
//! The `shelf compare <installed> <latest>` command applies the catalog's
//! version comparison to two strings.

use crate::cli::args::CompareArgs;
use crate::error::Result;
use crate::install::has_update;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The compare command implementation.
pub struct CompareCommand {
    args: CompareArgs,
}

impl CompareCommand {
    /// Create a new compare command.
    pub fn new(args: CompareArgs) -> Self {
        Self { args }
    }
}

impl Command for CompareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let CompareArgs { installed, latest } = &self.args;

        if has_update(installed, latest) {
            ui.success(&format!("Update available: {} → {}", installed, latest));
        } else {
            ui.message(&format!("No update: {} is not older than {}", installed, latest));
        }

        Ok(CommandResult::success())
    }
}
