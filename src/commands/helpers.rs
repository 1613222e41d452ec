//! Command helper utilities

use std::path::PathBuf;

use console::Style;
use tracing::warn;

use crate::archive::{Archive, InstallerIndex};
use crate::catalog::{Catalog, Discover};
use crate::deployment::Deployment;
use crate::error::{ModularError, Result};

/// Resolve the deployment root from the optional argument
///
/// If a root is provided, use it. Otherwise, use the current directory.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| ModularError::IoError {
            message: format!("Failed to get current directory: {e}"),
        }),
    }
}

/// Open the given archive, or the deployment's packages directory
///
/// An archive carrying an installer index is verified against it.
pub fn select_archive(deployment: &Deployment, path: Option<PathBuf>) -> Result<Archive> {
    let archive = match path {
        Some(path) => Archive::open(&path)?,
        None => deployment.default_archive(),
    };
    if let Some(index) = InstallerIndex::load(&archive)? {
        index.verify(&archive)?;
    }
    Ok(archive)
}

/// Discover the packages of `archive` as a catalog
pub fn discover_catalog(archive: &Archive) -> Result<Catalog> {
    Catalog::new(archive.discover()?)
}

/// Print a header followed by one package name per line
pub fn print_names(header: &str, names: &[String]) {
    println!("{}", Style::new().bold().green().apply_to(header));
    for name in names {
        println!("  {}", Style::new().bold().yellow().apply_to(name));
    }
}

/// Bring the client manifest in line with the packages a failed run applied
pub fn refresh_after_failure(deployment: &Deployment) {
    if let Err(e) = deployment.refresh_client_manifest() {
        warn!("Failed to rewrite client manifest: {e}");
    }
}
