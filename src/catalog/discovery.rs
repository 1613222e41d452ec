//! Package discovery
//!
//! Discovery enumerates package descriptors from storage. Results must be
//! stable-ordered so that resolving the same storage twice yields the same
//! installation plan.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::archive::{Archive, ArchiveLayout, PACKAGES_DIR};
use crate::error::{self, Result};
use crate::package::manifest::PACKAGE_FILE;
use crate::package::{FileLifecycle, Package, PackageManifest};

/// Source of package descriptors
pub trait Discover {
    /// Enumerate known packages in a stable order
    fn discover(&self) -> Result<Vec<Package>>;
}

/// Discovers `<dir>/*/package.yaml`, ordered by directory name
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery {
    dir: PathBuf,
}

impl DirectoryDiscovery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Discover for DirectoryDiscovery {
    fn discover(&self) -> Result<Vec<Package>> {
        if !self.dir.is_dir() {
            return Err(error::fs::not_found(&self.dir));
        }

        let mut package_dirs: Vec<PathBuf> = fs::read_dir(&self.dir)
            .map_err(|e| error::fs::read_failed(&self.dir, e))?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        package_dirs.sort();

        let mut packages = Vec::new();
        for dir in package_dirs {
            let descriptor = dir.join(PACKAGE_FILE);
            if !descriptor.is_file() {
                debug!("Skipping {}: no {}", dir.display(), PACKAGE_FILE);
                continue;
            }
            let package = load_package(&descriptor)?;
            let dir_name = dir.file_name().map(|n| n.to_string_lossy().into_owned());
            if dir_name.as_deref() != Some(package.name.as_str()) {
                return Err(error::package::invalid(
                    &package.name,
                    format!(
                        "declared in {}, but must live in a directory named '{}'",
                        dir.display(),
                        package.name
                    ),
                ));
            }
            packages.push(package);
        }

        debug!(
            "Discovered {} package(s) in {}",
            packages.len(),
            self.dir.display()
        );
        Ok(packages)
    }
}

impl Discover for Archive {
    fn discover(&self) -> Result<Vec<Package>> {
        match self.layout() {
            ArchiveLayout::Bundle => {
                DirectoryDiscovery::new(self.root().join(PACKAGES_DIR)).discover()
            }
            ArchiveLayout::Single => Ok(vec![load_package(&self.root().join(PACKAGE_FILE))?]),
            ArchiveLayout::Directory => DirectoryDiscovery::new(self.root()).discover(),
        }
    }
}

/// Load one descriptor and bind the file-copy lifecycle to it
fn load_package(descriptor: &Path) -> Result<Package> {
    let package = PackageManifest::load(descriptor)?.into_package()?;
    Ok(package.with_lifecycle(Arc::new(FileLifecycle)))
}
