//! Show command implementation

use std::path::PathBuf;

use console::Style;

use crate::catalog::Catalog;
use crate::cli::ShowArgs;
use crate::commands::helpers::resolve_root;
use crate::deployment::Deployment;
use crate::error::{self, Result};
use crate::package::Package;
use crate::package::lifecycle::FileRecord;
use crate::resolver::resolve_dependents;

pub fn run(root: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let deployment = Deployment::open(&root)?;
    let installed = deployment.installed()?;

    let package = installed
        .get(&args.name)
        .ok_or_else(|| error::package::not_installed(&args.name))?;

    show_package(&deployment, &installed, package)
}

fn show_package(deployment: &Deployment, installed: &Catalog, package: &Package) -> Result<()> {
    let label = Style::new().bold();

    println!("{}", Style::new().bold().yellow().apply_to(&package.name));
    println!("  {} {}", label.apply_to("Version:"), package.version);
    println!("  {} {}", label.apply_to("Vendor:"), package.vendor);

    println!("  {}", label.apply_to("Dependencies:"));
    if package.dependencies.is_empty() {
        println!("    none");
    }
    for (name, required) in &package.dependencies {
        let actual = installed
            .get(name)
            .map_or_else(|| "missing".to_string(), |p| p.version.clone());
        println!("    {name} >= {required} (installed: {actual})");
    }

    let dependents = resolve_dependents(installed, package)?;
    println!("  {}", label.apply_to("Required by:"));
    if dependents.is_empty() {
        println!("    none");
    }
    for dependent in &dependents {
        println!("    {dependent}");
    }

    if let Some(record) = FileRecord::load(&deployment.root, &package.name)? {
        println!("  {} {}", label.apply_to("Files:"), record.files.len());
        for file in &record.files {
            println!("    {}", file.path);
        }
    }

    Ok(())
}
