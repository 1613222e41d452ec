//! Client manifest (public/manifest.json)
//!
//! The list of installed packages served to clients. Orchestrators add and
//! remove entries while they run and regenerate the file once at the end.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::common::fs::ensure_parent_dir;
use crate::error::{self, Result};
use crate::package::Package;

/// Client manifest filename inside the public directory
pub const MANIFEST_FILE: &str = "manifest.json";

/// Receiver of installed-package bookkeeping for clients
pub trait ManifestSink {
    fn add_package(&mut self, package: &Package);

    fn remove_package(&mut self, name: &str);

    /// Write the manifest for the deployment at `root`
    fn create(&mut self, root: &Path) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub version: String,
    pub vendor: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ManifestData {
    #[serde(default)]
    packages: Vec<ManifestEntry>,
}

/// File-backed [`ManifestSink`]
#[derive(Debug, Clone)]
pub struct ClientManifest {
    public_dir: String,
    entries: BTreeMap<String, ManifestEntry>,
}

impl ClientManifest {
    pub fn new(public_dir: impl Into<String>) -> Self {
        Self {
            public_dir: public_dir.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Manifest listing every package of the installed catalog
    ///
    /// Built from the installed store rather than the file on disk, so a
    /// run that aborted before writing the file cannot drop packages.
    pub fn from_installed(public_dir: impl Into<String>, installed: &Catalog) -> Self {
        let mut manifest = Self::new(public_dir);
        for package in installed {
            manifest.add_package(package);
        }
        manifest
    }

    pub fn path_for(root: &Path, public_dir: &str) -> PathBuf {
        root.join(public_dir).join(MANIFEST_FILE)
    }

    /// Read the entries last written for `root`
    #[cfg(test)]
    pub fn read_entries(root: &Path, public_dir: &str) -> Result<Vec<ManifestEntry>> {
        let path = Self::path_for(root, public_dir);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| error::fs::read_failed(&path, e))?;
        let data: ManifestData = serde_json::from_str(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))?;
        Ok(data.packages)
    }
}

impl ManifestSink for ClientManifest {
    fn add_package(&mut self, package: &Package) {
        self.entries.insert(
            package.name.clone(),
            ManifestEntry {
                name: package.name.clone(),
                version: package.version.clone(),
                vendor: package.vendor.clone(),
            },
        );
    }

    fn remove_package(&mut self, name: &str) {
        self.entries.remove(name);
    }

    fn create(&mut self, root: &Path) -> Result<()> {
        let path = Self::path_for(root, &self.public_dir);
        let data = ManifestData {
            packages: self.entries.values().cloned().collect(),
        };

        ensure_parent_dir(&path)?;
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&path, json).map_err(|e| error::fs::write_failed(&path, e))
    }
}
