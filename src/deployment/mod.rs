//! Deployment state
//!
//! This module handles:
//! - Opening and initializing the state directory of a deployment root
//! - Loading the deployment config and the installed catalog store
//! - Advisory locking so only one install or uninstall runs at a time
//!
//! ## State Directory Structure
//!
//! ```text
//! <root>/.modular/
//! ├── modular.yaml    # Deployment config (optional)
//! ├── installed.json  # Installed packages, in install order
//! ├── files/          # Per-package installed file records
//! └── .lock           # Advisory lock file
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use fslock::LockFile;
use tracing::debug;

use crate::archive::Archive;
use crate::catalog::{Catalog, INSTALLED_FILE, InstalledStore};
use crate::config::DeploymentConfig;
use crate::error::{self, ModularError, Result};
use crate::hooks::HookRegistry;
use crate::manifest::{ClientManifest, ManifestSink};

/// State directory name inside the deployment root
pub const STATE_DIR: &str = ".modular";

/// Installed file records subdirectory
pub const FILES_DIR: &str = "files";

/// Lock file for deployment locking
pub const LOCK_FILE: &str = ".lock";

/// A deployment root and its persisted state
#[derive(Debug)]
pub struct Deployment {
    /// Deployment root passed to every lifecycle and hook call
    pub root: PathBuf,

    /// Path to the .modular directory
    pub state_dir: PathBuf,

    pub config: DeploymentConfig,

    /// Installed catalog (installed.json)
    pub store: InstalledStore,
}

/// RAII guard over the deployment lock file
#[derive(Debug)]
pub struct DeploymentGuard {
    lock: LockFile,
}

impl Deployment {
    pub fn exists(root: &Path) -> bool {
        root.join(STATE_DIR).is_dir()
    }

    /// Open an existing deployment
    pub fn open(root: &Path) -> Result<Self> {
        let state_dir = root.join(STATE_DIR);
        if !state_dir.is_dir() {
            return Err(error::deployment::not_found(root.display().to_string()));
        }

        let config = DeploymentConfig::load(&state_dir)?;
        let store = InstalledStore::load(&state_dir.join(INSTALLED_FILE))?;

        Ok(Self {
            root: root.to_path_buf(),
            state_dir,
            config,
            store,
        })
    }

    /// Create the state directory with a default config
    pub fn init(root: &Path) -> Result<Self> {
        let state_dir = root.join(STATE_DIR);
        fs::create_dir_all(&state_dir)?;

        let gitignore_path = state_dir.join(".gitignore");
        fs::write(&gitignore_path, format!("{LOCK_FILE}\n"))
            .map_err(|e| error::fs::write_failed(&gitignore_path, e))?;

        let config = DeploymentConfig::default();
        config.save(&state_dir)?;
        debug!("Initialized deployment at {}", root.display());

        Ok(Self {
            root: root.to_path_buf(),
            store: InstalledStore::load(&state_dir.join(INSTALLED_FILE))?,
            state_dir,
            config,
        })
    }

    /// Open the deployment at `root`, or describe a fresh one without
    /// creating anything on disk
    pub fn load(root: &Path) -> Result<Self> {
        if Self::exists(root) {
            return Self::open(root);
        }
        let state_dir = root.join(STATE_DIR);
        Ok(Self {
            root: root.to_path_buf(),
            store: InstalledStore::load(&state_dir.join(INSTALLED_FILE))?,
            state_dir,
            config: DeploymentConfig::default(),
        })
    }

    /// Installed packages as a fresh catalog
    pub fn installed(&self) -> Result<Catalog> {
        self.store.catalog()
    }

    /// Packages directory used when no archive is given
    pub fn default_archive(&self) -> Archive {
        Archive::directory(self.root.join(&self.config.packages_dir))
    }

    /// Module hooks named by the config, in registration order
    pub fn hooks(&self) -> Result<HookRegistry> {
        HookRegistry::from_ids(&self.config.hooks, &self.config)
    }

    /// Client manifest listing the installed packages
    pub fn client_manifest(&self) -> Result<ClientManifest> {
        Ok(ClientManifest::from_installed(
            self.config.public_dir.as_str(),
            &self.installed()?,
        ))
    }

    /// Rewrite the client manifest from the installed store
    ///
    /// Used after a failed run, whose orchestrator never reached the final
    /// manifest write.
    pub fn refresh_client_manifest(&self) -> Result<()> {
        self.client_manifest()?.create(&self.root)
    }

    /// Open an existing deployment while holding its lock
    ///
    /// The config and installed store are read after the lock is taken, so
    /// a run queued behind another one sees that run's changes.
    pub fn open_locked(root: &Path) -> Result<(Self, DeploymentGuard)> {
        if !Self::exists(root) {
            return Err(error::deployment::not_found(root.display().to_string()));
        }
        let guard = DeploymentGuard::acquire(&root.join(STATE_DIR))?;
        Ok((Self::open(root)?, guard))
    }

    /// Like [`Deployment::open_locked`], initializing the state first if needed
    pub fn init_or_open_locked(root: &Path) -> Result<(Self, DeploymentGuard)> {
        if !Self::exists(root) {
            Self::init(root)?;
        }
        Self::open_locked(root)
    }
}

impl DeploymentGuard {
    /// Acquire the lock, blocking until it is free
    pub fn acquire(state_dir: &Path) -> Result<Self> {
        if !state_dir.is_dir() {
            return Err(error::deployment::not_found(state_dir.display().to_string()));
        }

        let lock_path = state_dir.join(LOCK_FILE);
        let mut lock = LockFile::open(&lock_path).map_err(|e| ModularError::DeploymentLockFailed {
            reason: format!("Failed to open lock file: {e}"),
        })?;
        lock.lock().map_err(|_| ModularError::DeploymentLocked)?;

        debug!("Acquired deployment lock {}", lock_path.display());
        Ok(Self { lock })
    }
}

impl Drop for DeploymentGuard {
    fn drop(&mut self) {
        // The lock file is kept; a waiting run may already hold it open
        let _ = self.lock.unlock();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::CatalogStore;
    use crate::package::Package;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_fails() {
        let temp = TempDir::new().unwrap();
        let err = Deployment::open(temp.path()).unwrap_err();
        assert!(matches!(err, ModularError::DeploymentNotFound { .. }));
    }

    #[test]
    fn test_init_creates_state_dir() {
        let temp = TempDir::new().unwrap();
        let deployment = Deployment::init(temp.path()).unwrap();

        assert!(Deployment::exists(temp.path()));
        assert!(deployment.state_dir.join(crate::config::CONFIG_FILE).is_file());
        assert!(deployment.installed().unwrap().is_empty());
    }

    #[test]
    fn test_init_or_open_locked_keeps_installed() {
        let temp = TempDir::new().unwrap();
        {
            let (mut deployment, _guard) = Deployment::init_or_open_locked(temp.path()).unwrap();
            deployment
                .store
                .record(&Package::new("core", "1.0.0", "Acme"))
                .unwrap();
        }

        let (reopened, _guard) = Deployment::init_or_open_locked(temp.path()).unwrap();
        assert!(reopened.installed().unwrap().contains("core"));
    }

    #[test]
    fn test_open_locked_missing_fails() {
        let temp = TempDir::new().unwrap();
        assert!(matches!(
            Deployment::open_locked(temp.path()),
            Err(ModularError::DeploymentNotFound { .. })
        ));
        assert!(!Deployment::exists(temp.path()));
    }

    #[test]
    fn test_load_without_state_creates_nothing() {
        let temp = TempDir::new().unwrap();
        let deployment = Deployment::load(temp.path()).unwrap();

        assert!(!Deployment::exists(temp.path()));
        assert_eq!(deployment.config, DeploymentConfig::default());
        assert_eq!(
            deployment.default_archive().package_dir("core"),
            temp.path().join("packages/core")
        );
    }

    #[test]
    fn test_default_hooks_registered() {
        let temp = TempDir::new().unwrap();
        let deployment = Deployment::init(temp.path()).unwrap();
        assert_eq!(deployment.hooks().unwrap().ids(), vec!["assets", "config"]);
    }

    #[test]
    fn test_lock_released_on_drop() {
        let temp = TempDir::new().unwrap();
        Deployment::init(temp.path()).unwrap();

        {
            let (deployment, _guard) = Deployment::open_locked(temp.path()).unwrap();
            assert!(deployment.state_dir.join(LOCK_FILE).exists());
        }
        assert!(Deployment::open_locked(temp.path()).is_ok());
    }

    #[test]
    fn test_queued_run_sees_previous_holder_changes() {
        let temp = TempDir::new().unwrap();
        Deployment::init(temp.path()).unwrap();
        let (mut first, guard) = Deployment::open_locked(temp.path()).unwrap();

        let root = temp.path().to_path_buf();
        let second = std::thread::spawn(move || {
            let (mut second, _guard) = Deployment::open_locked(&root).unwrap();
            second
                .store
                .record(&Package::new("reports", "1.0.0", "Acme"))
                .unwrap();
        });

        first
            .store
            .record(&Package::new("ui", "1.0.0", "Acme"))
            .unwrap();
        drop(guard);
        second.join().unwrap();

        let installed = Deployment::open(temp.path()).unwrap().installed().unwrap();
        assert_eq!(installed.names(), vec!["ui".to_string(), "reports".to_string()]);
    }

    #[test]
    fn test_client_manifest_follows_installed_store() {
        let temp = TempDir::new().unwrap();
        let mut deployment = Deployment::init(temp.path()).unwrap();
        deployment
            .store
            .record(&Package::new("core", "1.0.0", "Acme"))
            .unwrap();

        deployment.refresh_client_manifest().unwrap();

        let written = std::fs::read_to_string(
            ClientManifest::path_for(temp.path(), &deployment.config.public_dir),
        )
        .unwrap();
        assert!(written.contains("\"core\""));
    }
}
