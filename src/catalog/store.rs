//! Installed catalog store (installed.json)
//!
//! Records which packages are installed, in install order. Every change is
//! written to disk immediately so that a run aborted halfway still leaves an
//! accurate record of the packages it already applied.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::error::{self, Result};
use crate::package::{FileLifecycle, Package, PackageManifest};

/// Installed store filename inside the state directory
pub const INSTALLED_FILE: &str = "installed.json";

/// Persistence for the set of installed packages
pub trait CatalogStore {
    /// Record `package` as installed
    fn record(&mut self, package: &Package) -> Result<()>;

    /// Forget the package named `name`
    fn remove(&mut self, name: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct InstalledData {
    #[serde(default)]
    packages: Vec<PackageManifest>,
}

/// JSON-backed [`CatalogStore`]
#[derive(Debug, Clone)]
pub struct InstalledStore {
    path: PathBuf,
    data: InstalledData,
}

impl InstalledStore {
    /// Load the store at `path`, or start empty if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self {
                path: path.to_path_buf(),
                data: InstalledData::default(),
            });
        }

        let content = fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;
        let data: InstalledData = serde_json::from_str(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    /// Write the store to disk
    pub fn save(&self) -> Result<()> {
        crate::common::fs::ensure_parent_dir(&self.path)?;
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json).map_err(|e| error::fs::write_failed(&self.path, e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.packages.is_empty()
    }

    pub fn manifests(&self) -> &[PackageManifest] {
        &self.data.packages
    }

    /// Installed packages as a catalog, in install order
    ///
    /// Each package is bound to the file lifecycle so it can be uninstalled.
    pub fn catalog(&self) -> Result<Catalog> {
        let packages = self
            .data
            .packages
            .iter()
            .cloned()
            .map(|manifest| {
                manifest
                    .into_package()
                    .map(|p| p.with_lifecycle(Arc::new(FileLifecycle)))
            })
            .collect::<Result<Vec<_>>>()?;
        Catalog::new(packages)
    }
}

impl CatalogStore for InstalledStore {
    fn record(&mut self, package: &Package) -> Result<()> {
        let manifest = package.manifest();
        match self
            .data
            .packages
            .iter_mut()
            .find(|m| m.name == manifest.name)
        {
            Some(existing) => *existing = manifest,
            None => self.data.packages.push(manifest),
        }
        self.save()
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        self.data.packages.retain(|m| m.name != name);
        self.save()
    }
}
