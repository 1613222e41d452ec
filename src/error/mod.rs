//! Error types and handling for Modular
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`version`]: Version parsing errors
//! - [`deps`]: Dependency resolution and gating errors
//! - [`package`]: Package descriptor and catalog errors
//! - [`hook`]: Lifecycle and module hook failures
//! - [`deployment`]: Deployment state errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod deployment;
pub mod deps;
pub mod fs;
pub mod hook;
pub mod package;
pub mod version;


use miette::Diagnostic;
use thiserror::Error;

use crate::operations::Phase;

/// Main error type for Modular operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModularError {
    // Version errors
    #[error("Malformed version '{version}': {reason}")]
    #[diagnostic(
        code(modular::version::malformed),
        help("Versions are dotted unsigned integers such as 1.2.3")
    )]
    MalformedVersion { version: String, reason: String },

    // Package errors
    #[error("Invalid package '{name}': {reason}")]
    #[diagnostic(code(modular::package::invalid))]
    InvalidPackage { name: String, reason: String },

    #[error("Package '{name}' is declared more than once")]
    #[diagnostic(
        code(modular::package::duplicate),
        help("Package names must be unique within a catalog")
    )]
    DuplicatePackage { name: String },

    #[error("Package '{name}' is not installed")]
    #[diagnostic(
        code(modular::package::not_installed),
        help("Run 'modular list' to see installed packages")
    )]
    PackageNotInstalled { name: String },

    #[error("Package '{name}' is already installed")]
    #[diagnostic(
        code(modular::package::already_installed),
        help("Uninstall the package first to reinstall it")
    )]
    PackageAlreadyInstalled { name: String },

    // Dependency errors
    #[error("Cannot resolve package '{package}': dependency '{dependency}' {reason}")]
    #[diagnostic(
        code(modular::deps::unresolvable),
        help("Add the missing package or break the dependency cycle")
    )]
    ResolutionError {
        package: String,
        dependency: String,
        reason: String,
    },

    #[error("Package '{package}' requires '{dependency}' which is not installed")]
    #[diagnostic(
        code(modular::deps::missing),
        help("Install the dependency before installing this package")
    )]
    DependencyMissing { package: String, dependency: String },

    #[error(
        "Package '{package}' requires '{dependency}' >= {required}, but {actual} is installed"
    )]
    #[diagnostic(
        code(modular::deps::version_mismatch),
        help("Update the installed dependency first")
    )]
    DependencyVersionMismatch {
        package: String,
        dependency: String,
        required: String,
        actual: String,
    },

    // Hook errors
    #[error(
        "{phase} failed for package '{package}'{}: {source}{}",
        hook_suffix(.hook),
        applied_suffix(.applied)
    )]
    #[diagnostic(
        code(modular::hook::failed),
        help("No rollback was performed; finish or revert the listed packages manually")
    )]
    HookFailure {
        phase: Phase,
        package: String,
        hook: Option<String>,
        applied: Vec<String>,
        #[source]
        source: Box<ModularError>,
    },

    #[error("Hook '{hook}' is already registered")]
    #[diagnostic(code(modular::hook::duplicate))]
    DuplicateHook { hook: String },

    #[error("Unknown module hook '{hook}'")]
    #[diagnostic(
        code(modular::hook::unknown),
        help("Built-in hooks: assets, config")
    )]
    UnknownHook { hook: String },

    // Archive errors
    #[error("Invalid installer archive at '{path}': {reason}")]
    #[diagnostic(code(modular::archive::invalid))]
    ArchiveInvalid { path: String, reason: String },

    // Deployment errors
    #[error("Deployment not found at: {path}")]
    #[diagnostic(
        code(modular::deployment::not_found),
        help("Run 'modular setup' to initialize a deployment")
    )]
    DeploymentNotFound { path: String },

    #[error("Deployment already has {count} installed package(s)")]
    #[diagnostic(
        code(modular::deployment::already_set_up),
        help("Use 'modular install <archive>' to add packages to an existing deployment")
    )]
    AlreadySetUp { count: usize },

    #[error("Deployment is locked by another operation")]
    #[diagnostic(
        code(modular::deployment::locked),
        help("Wait for the running install or uninstall to finish")
    )]
    DeploymentLocked,

    #[error("Failed to lock deployment: {reason}")]
    #[diagnostic(code(modular::deployment::lock_failed))]
    DeploymentLockFailed { reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(modular::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(modular::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(modular::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(modular::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(modular::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(modular::fs::io_error))]
    IoError { message: String },
}

fn hook_suffix(hook: &Option<String>) -> String {
    hook.as_ref()
        .map(|h| format!(" in hook '{h}'"))
        .unwrap_or_default()
}

fn applied_suffix(applied: &[String]) -> String {
    if applied.is_empty() {
        " (nothing applied yet)".to_string()
    } else {
        format!(" (already applied: {})", applied.join(", "))
    }
}

impl From<std::io::Error> for ModularError {
    fn from(err: std::io::Error) -> Self {
        ModularError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ModularError {
    fn from(err: serde_yaml::Error) -> Self {
        ModularError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ModularError {
    fn from(err: serde_json::Error) -> Self {
        ModularError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModularError>;
