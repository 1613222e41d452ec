//! Install command CLI wrapper
//!
//! Installs one package directory into an existing deployment, delegating
//! the dependency checks and lifecycle to operations/install.rs.

use std::path::{Path, PathBuf};

use crate::archive::{Archive, ArchiveLayout};
use crate::catalog::Discover;
use crate::cli::InstallArgs;
use crate::commands::helpers::{refresh_after_failure, resolve_root};
use crate::deployment::Deployment;
use crate::error::{self, Result};
use crate::operations::{InstallOperation, check_dependencies};
use crate::package::Package;
use crate::package::manifest::PACKAGE_FILE;

/// Run install command
pub fn run(root: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let root = resolve_root(root)?;

    if args.dry_run {
        let deployment = Deployment::open(&root)?;
        let (package, _) = open_package(&args.archive)?;
        let installed = deployment.installed()?;
        if installed.contains(&package.name) {
            return Err(error::package::already_installed(&package.name));
        }
        check_dependencies(&package, &installed)?;
        println!("Dependencies satisfied; would install {package}");
        return Ok(());
    }

    let (mut deployment, _guard) = Deployment::open_locked(&root)?;
    let (package, archive) = open_package(&args.archive)?;
    let installed = deployment.installed()?;

    let hooks = deployment.hooks()?;
    let mut manifest = deployment.client_manifest()?;

    let result = InstallOperation::new(&hooks, &mut deployment.store, &mut manifest, &deployment.root)
        .install_package(&package, &installed, &archive);
    if result.is_err() {
        refresh_after_failure(&deployment);
    }
    result?;

    println!("Installed {package}");
    Ok(())
}

/// Open a single package archive and load its descriptor
fn open_package(path: &Path) -> Result<(Package, Archive)> {
    let archive = Archive::open(path)?;
    if archive.layout() != ArchiveLayout::Single {
        return Err(error::deployment::archive_invalid(
            path.display().to_string(),
            format!("expected a package directory containing {PACKAGE_FILE}"),
        ));
    }
    let package = archive.discover()?.into_iter().next().ok_or_else(|| {
        error::deployment::archive_invalid(path.display().to_string(), "no package found")
    })?;
    Ok((package, archive))
}
