//! Install operation
//!
//! Two entry points:
//! - [`InstallOperation::install_plan`] installs a full plan on a fresh
//!   deployment. PreInstall runs for every package first, then each package
//!   goes through Install, module hooks and PostInstall in plan order.
//! - [`InstallOperation::install_package`] adds one package to a deployment
//!   that already has packages installed, after checking its dependencies
//!   against the installed catalog.

use std::path::Path;

use tracing::{debug, info};

use super::Phase;
use crate::archive::Archive;
use crate::catalog::{Catalog, CatalogStore};
use crate::error::{self, Result};
use crate::hooks::HookRegistry;
use crate::manifest::ManifestSink;
use crate::package::Package;
use crate::progress::{ProgressReporter, SilentProgress};
use crate::resolver::InstallationPlan;
use crate::version;

/// Check every dependency of `package` against the installed catalog
///
/// # Errors
///
/// `DependencyMissing` if a dependency is not installed, or
/// `DependencyVersionMismatch` if the installed version is too old.
pub fn check_dependencies(package: &Package, installed: &Catalog) -> Result<()> {
    for (dependency, required) in &package.dependencies {
        let Some(present) = installed.get(dependency) else {
            return Err(error::deps::missing(&package.name, dependency));
        };
        if !version::at_least(&present.version, required)? {
            return Err(error::deps::version_mismatch(
                &package.name,
                dependency,
                required,
                &present.version,
            ));
        }
    }
    Ok(())
}

/// High-level install operation
pub struct InstallOperation<'a> {
    hooks: &'a HookRegistry,
    store: &'a mut dyn CatalogStore,
    manifest: &'a mut dyn ManifestSink,
    root: &'a Path,
    progress: Box<dyn ProgressReporter>,
}

impl<'a> InstallOperation<'a> {
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
            progress: Box::new(SilentProgress),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Install every package of `plan` from `archive`
    ///
    /// Returns the installed package names in plan order. The first failure
    /// aborts the run; packages already installed stay installed and are
    /// listed in the error.
    pub fn install_plan(&mut self, plan: &InstallationPlan, archive: &Archive) -> Result<Vec<String>> {
        let result = self.run_plan(plan, archive);
        match &result {
            Ok(_) => self.progress.finish(),
            Err(_) => self.progress.abandon(),
        }
        result
    }

    fn run_plan(&mut self, plan: &InstallationPlan, archive: &Archive) -> Result<Vec<String>> {
        for package in plan {
            debug!("Pre-install {}", package.name);
            package
                .lifecycle()
                .pre_install(package, archive, self.root)
                .map_err(|e| error::hook::failure(Phase::PreInstall, &package.name, None, &[], e))?;
        }

        let total = plan.len();
        let mut applied = Vec::with_capacity(total);
        for (idx, package) in plan.iter().enumerate() {
            self.progress.start_package(&package.name, idx + 1, total);
            self.apply(package, archive, &applied)?;
            applied.push(package.name.clone());
            self.progress.finish_package();
        }

        self.manifest.create(self.root)?;
        Ok(applied)
    }

    /// Install one package on top of the `installed` catalog
    ///
    /// Dependencies are checked before any lifecycle phase runs. PreInstall
    /// is a plan-wide phase and does not run for single installs.
    pub fn install_package(
        &mut self,
        package: &Package,
        installed: &Catalog,
        archive: &Archive,
    ) -> Result<()> {
        if installed.contains(&package.name) {
            return Err(error::package::already_installed(&package.name));
        }
        check_dependencies(package, installed)?;

        self.apply(package, archive, &[])?;
        self.manifest.create(self.root)
    }

    /// Install, module hooks, PostInstall, then bookkeeping for one package
    fn apply(&mut self, package: &Package, archive: &Archive, applied: &[String]) -> Result<()> {
        let name = package.name.as_str();

        package
            .lifecycle()
            .install(package, archive, self.root)
            .map_err(|e| error::hook::failure(Phase::Install, name, None, applied, e))?;

        for hook in self.hooks.all() {
            debug!("Dispatching {} install hook for {}", hook.id(), name);
            hook.on_install(package, archive, self.root).map_err(|e| {
                error::hook::failure(Phase::ModuleInstall, name, Some(hook.id()), applied, e)
            })?;
        }

        package
            .lifecycle()
            .post_install(package, archive, self.root)
            .map_err(|e| error::hook::failure(Phase::PostInstall, name, None, applied, e))?;

        self.store
            .record(package)
            .map_err(|e| error::hook::failure(Phase::Record, name, None, applied, e))?;
        self.manifest.add_package(package);

        info!("Installed {package}");
        Ok(())
    }
}
