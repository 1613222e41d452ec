//! Installer bundle creation
//!
//! Builds a bundle archive from a catalog: the selected packages are copied
//! under `packages/` and `installer.json` records the install order together
//! with a content hash per package, so `setup` can check the payload before
//! touching the deployment.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Archive, PACKAGES_DIR};
use crate::catalog::{Catalog, Discover};
use crate::common::fs::copy_dir_recursive;
use crate::error::{self, Result};
use crate::hash;
use crate::resolver::resolve;

/// Index filename at the root of a bundle archive
pub const INSTALLER_INDEX_FILE: &str = "installer.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub version: String,
    pub vendor: String,
    /// BLAKE3 hash of the package payload directory
    pub hash: String,
}

/// Contents of `installer.json`, in install order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallerIndex {
    pub packages: Vec<IndexEntry>,
}

impl InstallerIndex {
    /// Load the index of a bundle archive, if it has one
    pub fn load(archive: &Archive) -> Result<Option<Self>> {
        let path = archive.root().join(INSTALLER_INDEX_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| error::fs::read_failed(&path, e))?;
        let index = serde_json::from_str(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))?;
        Ok(Some(index))
    }

    fn save(&self, out: &Path) -> Result<()> {
        let path = out.join(INSTALLER_INDEX_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|e| error::fs::write_failed(&path, e))
    }

    pub fn names(&self) -> Vec<String> {
        self.packages.iter().map(|e| e.name.clone()).collect()
    }

    /// Check `archive` against the index
    ///
    /// Every indexed payload must match its recorded hash, and the archive
    /// must not carry packages the index does not list.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveInvalid` naming the first package whose payload is
    /// missing, changed or unlisted.
    pub fn verify(&self, archive: &Archive) -> Result<()> {
        let invalid = |name: &str, reason: &str| {
            error::deployment::archive_invalid(
                archive.root().display().to_string(),
                format!("package '{name}' {reason}"),
            )
        };

        for entry in &self.packages {
            let dir = archive.package_dir(&entry.name);
            if !dir.is_dir() {
                return Err(invalid(&entry.name, "is listed in the index but missing"));
            }
            if !hash::verify_hash(&entry.hash, &hash::hash_directory(&dir)?) {
                return Err(invalid(&entry.name, "does not match its recorded hash"));
            }
        }

        for package in archive.discover()? {
            if !self.packages.iter().any(|e| e.name == package.name) {
                return Err(invalid(&package.name, "is not listed in the installer index"));
            }
        }
        Ok(())
    }
}

/// Build a bundle archive at `out` from `source`
///
/// Packages named in `exclude` are left out. The remaining catalog must
/// still resolve, so excluding a package that others depend on fails with
/// the resolution error.
///
/// # Errors
///
/// `ArchiveInvalid` if `out` already contains files, a resolution error, or
/// file system errors while copying.
pub fn create_installer(
    catalog: &Catalog,
    source: &Archive,
    exclude: &[String],
    out: &Path,
) -> Result<InstallerIndex> {
    for name in exclude {
        if !catalog.contains(name) {
            warn!("Excluded package '{name}' is not in the catalog");
        }
    }

    let plan = resolve(&catalog.without(exclude))?;

    let out_is_empty = fs::read_dir(out).map_or(true, |mut entries| entries.next().is_none());
    if !out_is_empty {
        return Err(error::deployment::archive_invalid(
            out.display().to_string(),
            "output directory is not empty",
        ));
    }

    let mut index = InstallerIndex::default();
    for package in &plan {
        let target = out.join(PACKAGES_DIR).join(&package.name);
        copy_dir_recursive(&source.package_dir(&package.name), &target)?;

        index.packages.push(IndexEntry {
            name: package.name.clone(),
            version: package.version.clone(),
            vendor: package.vendor.clone(),
            hash: hash::hash_directory(&target)?,
        });
    }

    fs::create_dir_all(out).map_err(|e| error::fs::write_failed(out, e))?;
    index.save(out)?;
    info!("Created installer with {} package(s) at {}", index.packages.len(), out.display());
    Ok(index)
}
