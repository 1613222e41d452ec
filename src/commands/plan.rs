//! Plan command implementation
//!
//! Prints the resolved install order without touching the deployment.

use std::path::PathBuf;

use console::Style;

use crate::cli::PlanArgs;
use crate::commands::helpers::{discover_catalog, resolve_root, select_archive};
use crate::deployment::Deployment;
use crate::error::Result;
use crate::resolver::resolve;

/// Run plan command
pub fn run(root: Option<PathBuf>, args: PlanArgs) -> Result<()> {
    let root = resolve_root(root)?;
    let deployment = Deployment::load(&root)?;
    let archive = select_archive(&deployment, args.archive)?;
    let plan = resolve(&discover_catalog(&archive)?)?;

    println!("Install order ({} package(s)):", plan.len());
    for (idx, package) in plan.iter().enumerate() {
        println!(
            "  {:>3}. {} {}",
            idx + 1,
            Style::new().bold().yellow().apply_to(&package.name),
            Style::new().dim().apply_to(&package.version)
        );
    }
    Ok(())
}
