//! Recording test doubles for the orchestrators

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::archive::Archive;
use crate::catalog::CatalogStore;
use crate::error::{self, Result};
use crate::hooks::ModuleHook;
use crate::manifest::ManifestSink;
use crate::package::{Package, PackageLifecycle};

/// Shared, ordered event log
#[derive(Debug, Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<String>>>);

impl EventLog {
    pub fn push(&self, event: String) {
        if let Ok(mut events) = self.0.lock() {
            events.push(event);
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.0.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Events starting with `prefix`
    pub fn matching(&self, prefix: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.starts_with(prefix))
            .collect()
    }
}

/// Lifecycle logging `<phase>:<package>`, optionally failing one phase
#[derive(Debug)]
pub struct RecordingLifecycle {
    pub log: EventLog,
    pub fail_phase: Option<&'static str>,
}

impl RecordingLifecycle {
    fn step(&self, phase: &'static str, package: &Package) -> Result<()> {
        self.log.push(format!("{phase}:{}", package.name));
        if self.fail_phase == Some(phase) {
            return Err(error::package::invalid(&package.name, format!("{phase} exploded")));
        }
        Ok(())
    }
}

impl PackageLifecycle for RecordingLifecycle {
    fn pre_install(&self, package: &Package, _: &Archive, _: &Path) -> Result<()> {
        self.step("pre_install", package)
    }

    fn install(&self, package: &Package, _: &Archive, _: &Path) -> Result<()> {
        self.step("install", package)
    }

    fn post_install(&self, package: &Package, _: &Archive, _: &Path) -> Result<()> {
        self.step("post_install", package)
    }

    fn uninstall(&self, package: &Package, _: &Path) -> Result<()> {
        self.step("uninstall", package)
    }
}

/// Package with dependencies bound to a recording lifecycle
pub fn recorded(
    log: &EventLog,
    name: &str,
    version: &str,
    deps: &[(&str, &str)],
    fail_phase: Option<&'static str>,
) -> Package {
    deps.iter()
        .fold(Package::new(name, version, "Acme"), |p, (dep, v)| {
            p.with_dependency(*dep, *v)
        })
        .with_lifecycle(Arc::new(RecordingLifecycle {
            log: log.clone(),
            fail_phase,
        }))
}

/// Hook logging `hook:<id>:<install|uninstall>:<package>`
#[derive(Debug)]
pub struct RecordingHook {
    pub id: &'static str,
    pub log: EventLog,
    pub fail_for: Option<&'static str>,
}

impl RecordingHook {
    pub fn new(id: &'static str, log: &EventLog) -> Self {
        Self {
            id,
            log: log.clone(),
            fail_for: None,
        }
    }

    fn notify(&self, action: &str, package: &Package) -> Result<()> {
        self.log
            .push(format!("hook:{}:{action}:{}", self.id, package.name));
        if self.fail_for == Some(package.name.as_str()) {
            return Err(error::package::invalid(&package.name, "hook exploded"));
        }
        Ok(())
    }
}

impl ModuleHook for RecordingHook {
    fn id(&self) -> &str {
        self.id
    }

    fn on_install(&self, package: &Package, _: &Archive, _: &Path) -> Result<()> {
        self.notify("install", package)
    }

    fn on_uninstall(&self, package: &Package, _: &Path) -> Result<()> {
        self.notify("uninstall", package)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub recorded: Vec<String>,
    pub removed: Vec<String>,
}

impl CatalogStore for MemoryStore {
    fn record(&mut self, package: &Package) -> Result<()> {
        self.recorded.push(package.name.clone());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        self.removed.push(name.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryManifest {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub created: usize,
}

impl ManifestSink for MemoryManifest {
    fn add_package(&mut self, package: &Package) {
        self.added.push(package.name.clone());
    }

    fn remove_package(&mut self, name: &str) {
        self.removed.push(name.to_string());
    }

    fn create(&mut self, _root: &Path) -> Result<()> {
        self.created += 1;
        Ok(())
    }
}
