//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - installer: Create-installer command arguments
//! - setup: Setup command arguments
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - list: List command arguments
//! - show: Show command arguments
//! - plan: Plan command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod installer;
pub mod list;
pub mod plan;
pub mod setup;
pub mod show;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use installer::InstallerArgs;
pub use list::ListArgs;
pub use plan::PlanArgs;
pub use setup::SetupArgs;
pub use show::ShowArgs;
pub use uninstall::UninstallArgs;

/// Modular - package installer for modular deployments
///
/// Resolve, install and remove versioned packages with their dependencies.
#[derive(Parser, Debug)]
#[command(
    name = "modular",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Dependency-ordered package installer for modular deployments",
    long_about = "Modular installs independently versioned packages into a deployment root \
                  in dependency order, notifies module hooks about every change and removes \
                  packages together with everything that depends on them.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modular setup                          \x1b[90m# Install every package of the deployment\x1b[0m\n   \
                  modular install ./reports              \x1b[90m# Add one package\x1b[0m\n   \
                  modular uninstall core --dry-run       \x1b[90m# Show what removing core would remove\x1b[0m\n   \
                  modular list                           \x1b[90m# List installed packages\x1b[0m\n   \
                  modular create-installer --out dist    \x1b[90m# Bundle packages into an installer\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Deployment root (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = "MODULAR_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle packages into an installer archive
    #[command(name = "create-installer")]
    CreateInstaller(InstallerArgs),

    /// Install all packages on a fresh deployment
    Setup(SetupArgs),

    /// Install a single package into an existing deployment
    Install(InstallArgs),

    /// Remove a package and everything that depends on it
    Uninstall(UninstallArgs),

    /// List installed packages
    List(ListArgs),

    /// Show installed package information
    Show(ShowArgs),

    /// Print the resolved install order
    Plan(PlanArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
