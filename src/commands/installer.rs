//! Create-installer command implementation

use std::path::PathBuf;

use crate::archive::create_installer;
use crate::cli::InstallerArgs;
use crate::commands::helpers::{discover_catalog, print_names, resolve_root, select_archive};
use crate::deployment::Deployment;
use crate::error::Result;

/// Run create-installer command
pub fn run(root: Option<PathBuf>, args: InstallerArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let deployment = Deployment::load(&root)?;
    let archive = select_archive(&deployment, args.archive)?;
    let catalog = discover_catalog(&archive)?;

    let index = create_installer(&catalog, &archive, &args.exclude, &args.out)?;

    print_names(
        &format!(
            "Created installer at {} with {} package(s):",
            args.out.display(),
            index.packages.len()
        ),
        &index.names(),
    );
    Ok(())
}
