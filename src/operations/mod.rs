//! Operations module for installing and uninstalling packages
//!
//! This module provides the orchestrators that drive package lifecycles:
//! - InstallOperation: full plan installs (setup) and single package installs
//! - UninstallOperation: removal of a package after all of its dependents
//!
//! The operations coordinate with:
//! - Resolver: install and removal ordering (from resolver module)
//! - Hooks: module hook notification (from hooks module)
//! - CatalogStore: persisted record of installed packages (from catalog module)
//! - ManifestSink: client manifest bookkeeping (from manifest module)
//!
//! Errors abort the run at the first failure. Nothing is rolled back; the
//! error names the phase, the package and the packages already applied.

pub mod install;
pub mod uninstall;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;

pub use install::{InstallOperation, check_dependencies};
pub use uninstall::{UninstallOperation, removal_order};

/// Lifecycle step during which an orchestrated run failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PreInstall,
    Install,
    ModuleInstall,
    PostInstall,
    Uninstall,
    ModuleUninstall,
    /// Updating the installed catalog store
    Record,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::PreInstall => "pre-install",
            Phase::Install => "install",
            Phase::ModuleInstall => "module install hooks",
            Phase::PostInstall => "post-install",
            Phase::Uninstall => "uninstall",
            Phase::ModuleUninstall => "module uninstall hooks",
            Phase::Record => "catalog update",
        };
        f.write_str(label)
    }
}
