//! Uninstall command CLI wrapper
//!
//! This module provides the CLI interface for uninstall operations,
//! delegating all business logic to operations/uninstall.rs.

use std::path::PathBuf;

use crate::cli::UninstallArgs;
use crate::commands::helpers::{print_names, refresh_after_failure, resolve_root};
use crate::deployment::Deployment;
use crate::error::Result;
use crate::operations::{UninstallOperation, removal_order};

/// Run uninstall command
pub fn run(root: Option<PathBuf>, args: UninstallArgs) -> Result<()> {
    let root = resolve_root(root)?;

    if args.dry_run {
        let deployment = Deployment::open(&root)?;
        let names: Vec<String> = removal_order(&deployment.installed()?, &args.name)?
            .into_iter()
            .map(|p| p.name)
            .collect();
        print_names(&format!("Would uninstall {} package(s):", names.len()), &names);
        return Ok(());
    }

    let (mut deployment, _guard) = Deployment::open_locked(&root)?;
    let installed = deployment.installed()?;
    let hooks = deployment.hooks()?;
    let mut manifest = deployment.client_manifest()?;

    let result = UninstallOperation::new(&hooks, &mut deployment.store, &mut manifest, &deployment.root)
        .uninstall(&installed, &args.name);
    if result.is_err() {
        refresh_after_failure(&deployment);
    }
    let removed = result?;

    print_names(&format!("Uninstalled {} package(s):", removed.len()), &removed);
    Ok(())
}
