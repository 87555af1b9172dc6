//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::time::Duration;

use crate::cli::args::{Cli, Commands};
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: CatalogConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher over a loaded configuration.
    pub fn new(config: CatalogConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn fetcher(&self) -> Result<HttpFetcher> {
        HttpFetcher::with_timeout(Duration::from_secs(self.config.timeout_secs))
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(
                    self.config.clone(),
                    self.fetcher()?,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Show(args)) => {
                let cmd = super::show::ShowCommand::new(
                    self.config.clone(),
                    self.fetcher()?,
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Some(Commands::Status(args)) => {
                let cmd = super::status::StatusCommand::new(self.config.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Compare(args)) => {
                let cmd = super::compare::CompareCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to list command with default args
                let cmd = super::list::ListCommand::new(
                    self.config.clone(),
                    self.fetcher()?,
                    crate::cli::args::ListArgs::default(),
                );
                cmd.execute(ui)
            }
        }
    }
}
