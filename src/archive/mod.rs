//! Installer archive payloads
//!
//! An [`Archive`] is the opaque handle passed to every lifecycle and module
//! hook call. The orchestrators never look inside it; only lifecycle and hook
//! implementations ask it where a package's payload lives.
//!
//! Bundle and single package layouts can be opened from disk:
//!
//! ```text
//! bundle/                      single/
//! ├── installer.json (opt)     ├── package.yaml
//! └── packages/                ├── files/
//!     ├── core/                └── assets/
//!     │   └── package.yaml
//!     └── ui/
//!         └── package.yaml
//! ```
//!
//! A deployment's own packages directory is a plain directory of package
//! directories, without the `packages/` level.

pub mod bundle;

use std::path::{Path, PathBuf};

use crate::error::{self, Result};
use crate::package::manifest::PACKAGE_FILE;

pub use bundle::{InstallerIndex, create_installer};

/// Directory holding package payloads inside a bundle archive
pub const PACKAGES_DIR: &str = "packages";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveLayout {
    /// Many packages under `packages/<name>/`
    Bundle,
    /// One package at the archive root
    Single,
    /// Many packages directly under the root
    Directory,
}

/// Handle to an installer payload on disk
#[derive(Debug, Clone)]
pub struct Archive {
    root: PathBuf,
    layout: ArchiveLayout,
}

impl Archive {
    pub fn bundle(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: ArchiveLayout::Bundle,
        }
    }

    pub fn single(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: ArchiveLayout::Single,
        }
    }

    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            layout: ArchiveLayout::Directory,
        }
    }

    /// Detect the layout of the archive at `path`
    ///
    /// # Errors
    ///
    /// Returns `ArchiveInvalid` if the directory holds neither a
    /// `package.yaml` nor a `packages/` directory.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            return Err(error::deployment::archive_invalid(
                path.display().to_string(),
                "not a directory",
            ));
        }
        if path.join(PACKAGE_FILE).is_file() {
            return Ok(Self::single(path));
        }
        if path.join(PACKAGES_DIR).is_dir() {
            return Ok(Self::bundle(path));
        }
        Err(error::deployment::archive_invalid(
            path.display().to_string(),
            format!("expected {PACKAGE_FILE} or a {PACKAGES_DIR}/ directory"),
        ))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> ArchiveLayout {
        self.layout
    }

    /// Directory holding the payload of package `name`
    pub fn package_dir(&self, name: &str) -> PathBuf {
        match self.layout {
            ArchiveLayout::Bundle => self.root.join(PACKAGES_DIR).join(name),
            ArchiveLayout::Single => self.root.clone(),
            ArchiveLayout::Directory => self.root.join(name),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_single_package_archive() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(PACKAGE_FILE), "name: x\nversion: 1.0.0\n").unwrap();

        let archive = Archive::open(temp.path()).unwrap();
        assert_eq!(archive.layout(), ArchiveLayout::Single);
        assert_eq!(archive.package_dir("x"), temp.path());
    }

    #[test]
    fn test_open_bundle_archive() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("packages/core")).unwrap();

        let archive = Archive::open(temp.path()).unwrap();
        assert_eq!(archive.layout(), ArchiveLayout::Bundle);
        assert_eq!(
            archive.package_dir("core"),
            temp.path().join("packages").join("core")
        );
    }

    #[test]
    fn test_open_rejects_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            Archive::open(temp.path()),
            Err(crate::error::ModularError::ArchiveInvalid { .. })
        ));
    }
}
