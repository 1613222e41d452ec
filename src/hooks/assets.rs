//! Static asset publishing hook
//!
//! Copies `<payload>/assets/**` to `<root>/<public_dir>/<package>/` so the
//! client can serve it. Uninstall removes that directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::ModuleHook;
use crate::archive::Archive;
use crate::common::fs::{copy_dir_recursive, remove_dir_if_exists};
use crate::error::Result;
use crate::package::Package;

pub const HOOK_ID: &str = "assets";

/// Payload subdirectory holding client assets
pub const ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone)]
pub struct AssetsHook {
    public_dir: String,
}

impl AssetsHook {
    pub fn new(public_dir: impl Into<String>) -> Self {
        Self {
            public_dir: public_dir.into(),
        }
    }

    fn target(&self, package: &Package, root: &Path) -> PathBuf {
        root.join(&self.public_dir).join(&package.name)
    }
}

impl ModuleHook for AssetsHook {
    fn id(&self) -> &str {
        HOOK_ID
    }

    fn on_install(&self, package: &Package, archive: &Archive, root: &Path) -> Result<()> {
        let source = archive.package_dir(&package.name).join(ASSETS_DIR);
        if !source.is_dir() {
            return Ok(());
        }

        let target = self.target(package, root);
        remove_dir_if_exists(&target)?;
        let copied = copy_dir_recursive(&source, &target)?;
        debug!("Published {} asset(s) for {}", copied.len(), package.name);
        Ok(())
    }

    fn on_uninstall(&self, package: &Package, root: &Path) -> Result<()> {
        remove_dir_if_exists(&self.target(package, root))
    }
}
