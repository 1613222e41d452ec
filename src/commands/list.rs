//! List command implementation
//!
//! This command lists installed packages in install order.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::resolve_root;
use crate::deployment::Deployment;
use crate::error::Result;
use crate::package::Package;

/// Run list command
pub fn run(root: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let deployment = Deployment::open(&root)?;
    let installed = deployment.installed()?;

    if installed.is_empty() {
        println!("No packages installed.");
        return Ok(());
    }

    println!("Installed packages ({}):", installed.len());
    println!();

    for package in &installed {
        display_package(package, args.detailed);
    }

    Ok(())
}

fn display_package(package: &Package, detailed: bool) {
    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(&package.name),
        Style::new().dim().apply_to(&package.version)
    );
    if !detailed {
        return;
    }

    println!(
        "    {} {}",
        Style::new().bold().apply_to("Vendor:"),
        package.vendor
    );
    if package.dependencies.is_empty() {
        println!("    {} none", Style::new().bold().apply_to("Dependencies:"));
    } else {
        println!("    {}", Style::new().bold().apply_to("Dependencies:"));
        for (name, version) in &package.dependencies {
            println!("      {name} >= {version}");
        }
    }
    println!();
}
