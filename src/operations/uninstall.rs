//! Uninstall operation
//!
//! Removes a package together with everything that transitively depends on
//! it. Dependents go first, most dependent first, and the target last. Hooks
//! are notified in registration order; only the package order is reversed.

use std::path::Path;

use tracing::{debug, info};

use super::Phase;
use crate::catalog::{Catalog, CatalogStore};
use crate::error::{self, Result};
use crate::hooks::HookRegistry;
use crate::manifest::ManifestSink;
use crate::package::Package;
use crate::resolver::resolve_dependents;

/// Packages removed when uninstalling `target`, in removal order
///
/// # Errors
///
/// `PackageNotInstalled` if `target` is not in `catalog`, or the resolution
/// error if the catalog cannot be ordered.
pub fn removal_order(catalog: &Catalog, target: &str) -> Result<Vec<Package>> {
    let package = catalog
        .get(target)
        .ok_or_else(|| error::package::not_installed(target))?;

    let mut order = resolve_dependents(catalog, package)?;
    order.push(package.clone());
    Ok(order)
}

/// High-level uninstall operation
pub struct UninstallOperation<'a> {
    hooks: &'a HookRegistry,
    store: &'a mut dyn CatalogStore,
    manifest: &'a mut dyn ManifestSink,
    root: &'a Path,
}

impl<'a> UninstallOperation<'a> {
    pub fn new(
        hooks: &'a HookRegistry,
        store: &'a mut dyn CatalogStore,
        manifest: &'a mut dyn ManifestSink,
        root: &'a Path,
    ) -> Self {
        Self {
            hooks,
            store,
            manifest,
            root,
        }
    }

    /// Uninstall `target` and its dependents from the installed `catalog`
    ///
    /// Returns the removed package names in removal order. The first failure
    /// aborts the run; packages already removed stay removed and are listed
    /// in the error.
    pub fn uninstall(&mut self, catalog: &Catalog, target: &str) -> Result<Vec<String>> {
        let order = removal_order(catalog, target)?;
        debug!(
            "Removal order for {target}: {}",
            order
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut removed = Vec::with_capacity(order.len());
        for package in &order {
            self.remove(package, &removed)?;
            removed.push(package.name.clone());
        }

        self.manifest.create(self.root)?;
        Ok(removed)
    }

    fn remove(&mut self, package: &Package, removed: &[String]) -> Result<()> {
        let name = package.name.as_str();

        package
            .lifecycle()
            .uninstall(package, self.root)
            .map_err(|e| error::hook::failure(Phase::Uninstall, name, None, removed, e))?;

        for hook in self.hooks.all() {
            debug!("Dispatching {} uninstall hook for {}", hook.id(), name);
            hook.on_uninstall(package, self.root).map_err(|e| {
                error::hook::failure(Phase::ModuleUninstall, name, Some(hook.id()), removed, e)
            })?;
        }

        self.store
            .remove(name)
            .map_err(|e| error::hook::failure(Phase::Record, name, None, removed, e))?;
        self.manifest.remove_package(name);

        info!("Uninstalled {package}");
        Ok(())
    }
}
