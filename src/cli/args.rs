//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Shelf - browse the Asedia app catalog and check for updates.
#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.shelf/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every app in the catalog (default if no command specified)
    List(ListArgs),

    /// Show one app's resolved details
    Show(ShowArgs),

    /// Check whether a package is installed and up to date
    Status(StatusArgs),

    /// Compare two version strings
    Compare(CompareArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Identity of the host app, for installation checks.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HostArgs {
    /// Package id of the running host app
    #[arg(long, env = "SHELF_HOST_PACKAGE", value_name = "PACKAGE")]
    pub host_package: Option<String>,

    /// Native version reported by the host app
    #[arg(long, env = "SHELF_HOST_VERSION", value_name = "VERSION")]
    pub host_version: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub host: HostArgs,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// App identifier, e.g. Asedia
    pub identifier: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    /// Package id or catalog display name (e.g. "Asedia Pro")
    pub target: String,

    #[command(flatten)]
    pub host: HostArgs,

    /// Latest known version to compare against
    #[arg(long, value_name = "VERSION")]
    pub latest: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `compare` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompareArgs {
    /// Installed version
    pub installed: String,

    /// Latest version
    pub latest: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
