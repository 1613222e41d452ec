//! Package configuration hook
//!
//! Materializes `<payload>/config.yaml` as `<root>/<config_dir>/<package>.yaml`.
//! An existing file belongs to the operator and is left alone.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::ModuleHook;
use crate::archive::Archive;
use crate::common::fs::ensure_parent_dir;
use crate::error::{self, Result};
use crate::package::Package;

pub const HOOK_ID: &str = "config";

/// Default configuration file inside a package payload
pub const PAYLOAD_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone)]
pub struct ConfigHook {
    config_dir: String,
}

impl ConfigHook {
    pub fn new(config_dir: impl Into<String>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    fn target(&self, package: &Package, root: &Path) -> PathBuf {
        root.join(&self.config_dir)
            .join(format!("{}.yaml", package.name))
    }
}

impl ModuleHook for ConfigHook {
    fn id(&self) -> &str {
        HOOK_ID
    }

    fn on_install(&self, package: &Package, archive: &Archive, root: &Path) -> Result<()> {
        let source = archive.package_dir(&package.name).join(PAYLOAD_CONFIG_FILE);
        if !source.is_file() {
            return Ok(());
        }

        let target = self.target(package, root);
        if target.exists() {
            debug!("Keeping existing config {}", target.display());
            return Ok(());
        }

        let content = fs::read_to_string(&source).map_err(|e| error::fs::read_failed(&source, e))?;
        serde_yaml::from_str::<serde_yaml::Value>(&content)
            .map_err(|e| error::config::parse_failed(source.display().to_string(), e.to_string()))?;

        ensure_parent_dir(&target)?;
        fs::write(&target, content).map_err(|e| error::fs::write_failed(&target, e))
    }

    fn on_uninstall(&self, package: &Package, root: &Path) -> Result<()> {
        let target = self.target(package, root);
        if target.is_file() {
            fs::remove_file(&target).map_err(|e| error::fs::write_failed(&target, e))?;
        }
        Ok(())
    }
}
