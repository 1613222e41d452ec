//! File-copy package lifecycle
//!
//! The default lifecycle for packages discovered on disk. A package payload
//! may carry a `files/` directory whose contents are copied into the
//! deployment root. Each copied file is recorded with its hash in
//! `.modular/files/<name>.json` so it can be removed again on uninstall.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Package, PackageLifecycle};
use crate::archive::Archive;
use crate::common::fs::{copy_dir_recursive, ensure_parent_dir, prune_empty_dirs};
use crate::deployment::{FILES_DIR, STATE_DIR};
use crate::error::{self, Result};
use crate::hash;

/// Payload subdirectory copied into the deployment root
pub const PAYLOAD_FILES_DIR: &str = "files";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledFile {
    /// Path relative to the deployment root, `/`-separated
    pub path: String,
    pub hash: String,
}

/// Files placed into the deployment root by one package
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileRecord {
    pub package: String,
    pub files: Vec<InstalledFile>,
}

impl FileRecord {
    pub fn path_for(root: &Path, package: &str) -> PathBuf {
        root.join(STATE_DIR)
            .join(FILES_DIR)
            .join(format!("{package}.json"))
    }

    pub fn load(root: &Path, package: &str) -> Result<Option<Self>> {
        let path = Self::path_for(root, package);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).map_err(|e| error::fs::read_failed(&path, e))?;
        let record = serde_json::from_str(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))?;
        Ok(Some(record))
    }

    fn save(&self, root: &Path) -> Result<()> {
        let path = Self::path_for(root, &self.package);
        ensure_parent_dir(&path)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|e| error::fs::write_failed(&path, e))
    }
}

/// Lifecycle that copies `files/` into the deployment root
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLifecycle;

impl PackageLifecycle for FileLifecycle {
    fn pre_install(&self, package: &Package, archive: &Archive, _root: &Path) -> Result<()> {
        let payload = archive.package_dir(&package.name);
        if payload.is_dir() {
            Ok(())
        } else {
            Err(error::fs::not_found(&payload))
        }
    }

    fn install(&self, package: &Package, archive: &Archive, root: &Path) -> Result<()> {
        let source = archive.package_dir(&package.name).join(PAYLOAD_FILES_DIR);
        let copied = if source.is_dir() {
            copy_dir_recursive(&source, root)?
        } else {
            Vec::new()
        };

        let files = copied
            .into_iter()
            .map(|path| {
                let hash = hash::hash_file(&root.join(&path))?;
                Ok(InstalledFile { path, hash })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("Copied {} file(s) for {}", files.len(), package.name);
        FileRecord {
            package: package.name.clone(),
            files,
        }
        .save(root)
    }

    fn post_install(&self, package: &Package, _archive: &Archive, root: &Path) -> Result<()> {
        let Some(record) = FileRecord::load(root, &package.name)? else {
            return Err(error::fs::not_found(&FileRecord::path_for(root, &package.name)));
        };

        for file in &record.files {
            let target = root.join(&file.path);
            let actual = hash::hash_file(&target)?;
            if !hash::verify_hash(&file.hash, &actual) {
                return Err(error::fs::write_failed(
                    &target,
                    "installed content does not match the payload",
                ));
            }
        }
        Ok(())
    }

    fn uninstall(&self, package: &Package, root: &Path) -> Result<()> {
        let Some(record) = FileRecord::load(root, &package.name)? else {
            debug!("No file record for {}, nothing to remove", package.name);
            return Ok(());
        };

        for file in &record.files {
            let relative = Path::new(&file.path);
            if relative
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
            {
                warn!("Ignoring suspicious path in record: {}", file.path);
                continue;
            }

            let target = root.join(relative);
            if !target.is_file() {
                continue;
            }
            if !hash::verify_hash(&file.hash, &hash::hash_file(&target)?) {
                warn!("Keeping modified file {}", target.display());
                continue;
            }
            fs::remove_file(&target).map_err(|e| error::fs::write_failed(&target, e))?;
            if let Some(parent) = target.parent() {
                prune_empty_dirs(parent, root);
            }
        }

        let record_path = FileRecord::path_for(root, &package.name);
        fs::remove_file(&record_path).map_err(|e| error::fs::write_failed(&record_path, e))
    }
}
