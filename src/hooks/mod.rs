//! Module hook registry
//!
//! Feature modules that want to react to package lifecycle events register a
//! [`ModuleHook`]. The orchestrators notify every registered hook, in
//! registration order, after a package's own install or uninstall phase.
//!
//! # Implementing a hook
//!
//! ```rust,ignore
//! use std::path::Path;
//! use crate::hooks::{HookRegistry, ModuleHook};
//!
//! #[derive(Debug)]
//! struct AuditHook;
//!
//! impl ModuleHook for AuditHook {
//!     fn id(&self) -> &str {
//!         "audit"
//!     }
//!
//!     fn on_install(&self, package: &Package, _archive: &Archive, _root: &Path) -> Result<()> {
//!         println!("installed {package}");
//!         Ok(())
//!     }
//!
//!     fn on_uninstall(&self, package: &Package, _root: &Path) -> Result<()> {
//!         println!("removed {package}");
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = HookRegistry::new();
//! registry.register(Box::new(AuditHook))?;
//! ```

pub mod assets;
pub mod config;

use std::path::Path;
use std::sync::Arc;

use crate::archive::Archive;
use crate::config::DeploymentConfig;
use crate::error::{self, Result};
use crate::package::Package;

pub use assets::AssetsHook;
pub use config::ConfigHook;

/// Observer notified on every package install and uninstall
pub trait ModuleHook: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this hook (e.g., "assets", "config")
    fn id(&self) -> &str;

    /// Called after a package's Install phase, before its PostInstall
    fn on_install(&self, package: &Package, archive: &Archive, root: &Path) -> Result<()>;

    /// Called after a package's Uninstall phase
    fn on_uninstall(&self, package: &Package, root: &Path) -> Result<()>;
}

/// Ordered collection of registered module hooks
///
/// Iteration order is registration order, for installs and uninstalls alike.
#[derive(Debug, Default)]
pub struct HookRegistry {
    hooks: Vec<Arc<dyn ModuleHook>>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register a module hook
    ///
    /// # Errors
    ///
    /// Returns `ModularError::DuplicateHook` if a hook with the same id is
    /// already registered.
    pub fn register(&mut self, hook: Box<dyn ModuleHook>) -> Result<()> {
        if self.get(hook.id()).is_some() {
            return Err(error::hook::duplicate(hook.id()));
        }
        self.hooks.push(Arc::from(hook));
        Ok(())
    }

    /// Build a registry from built-in hook ids, in the given order
    ///
    /// # Errors
    ///
    /// Returns `ModularError::UnknownHook` for an id with no built-in hook,
    /// or `ModularError::DuplicateHook` if an id repeats.
    pub fn from_ids(ids: &[String], settings: &DeploymentConfig) -> Result<Self> {
        let mut registry = Self::new();
        for id in ids {
            let hook: Box<dyn ModuleHook> = match id.as_str() {
                assets::HOOK_ID => Box::new(AssetsHook::new(&settings.public_dir)),
                config::HOOK_ID => Box::new(ConfigHook::new(&settings.config_dir)),
                other => return Err(error::hook::unknown(other)),
            };
            registry.register(hook)?;
        }
        Ok(registry)
    }

    /// All hooks in registration order
    pub fn all(&self) -> &[Arc<dyn ModuleHook>] {
        &self.hooks
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn ModuleHook>> {
        self.hooks.iter().find(|h| h.id() == id).cloned()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}
