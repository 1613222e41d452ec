//! Setup command implementation
//!
//! Installs every package of an archive on a deployment that has nothing
//! installed yet.

use std::path::PathBuf;

use crate::cli::SetupArgs;
use crate::commands::helpers::{
    discover_catalog, print_names, refresh_after_failure, resolve_root, select_archive,
};
use crate::deployment::Deployment;
use crate::error::{self, Result};
use crate::operations::InstallOperation;
use crate::progress::InteractiveProgress;
use crate::resolver::resolve;

/// Run setup command
pub fn run(root: Option<PathBuf>, args: SetupArgs) -> Result<()> {
    let root = resolve_root(root)?;

    if args.dry_run {
        let deployment = Deployment::load(&root)?;
        ensure_nothing_installed(&deployment)?;
        let archive = select_archive(&deployment, args.archive)?;
        let plan = resolve(&discover_catalog(&archive)?)?;
        print_names(
            &format!("Would install {} package(s):", plan.len()),
            &plan.names(),
        );
        return Ok(());
    }

    let (mut deployment, _guard) = Deployment::init_or_open_locked(&root)?;
    ensure_nothing_installed(&deployment)?;

    let archive = select_archive(&deployment, args.archive)?;
    let plan = resolve(&discover_catalog(&archive)?)?;

    let hooks = deployment.hooks()?;
    let mut manifest = deployment.client_manifest()?;
    let progress = InteractiveProgress::new(plan.len() as u64);

    let result = InstallOperation::new(&hooks, &mut deployment.store, &mut manifest, &deployment.root)
        .with_progress(Box::new(progress))
        .install_plan(&plan, &archive);
    if result.is_err() {
        refresh_after_failure(&deployment);
    }
    let names = result?;

    print_names(&format!("Installed {} package(s):", names.len()), &names);
    Ok(())
}

fn ensure_nothing_installed(deployment: &Deployment) -> Result<()> {
    let installed = deployment.installed()?;
    if installed.is_empty() {
        Ok(())
    } else {
        Err(error::deployment::already_set_up(installed.len()))
    }
}
