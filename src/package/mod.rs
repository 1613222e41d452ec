//! Package descriptors
//!
//! A [`Package`] is an immutable description of one installable unit: its
//! name, version, vendor and minimum-version dependencies, plus the
//! [`PackageLifecycle`] implementation that knows how to install it.
//!
//! Packages never run their own lifecycle; the orchestrators in
//! [`crate::operations`] invoke the hooks in a fixed phase order.

pub mod lifecycle;
pub mod manifest;

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::archive::Archive;
use crate::error::{self, Result};
use crate::version::Version;

pub use lifecycle::FileLifecycle;
pub use manifest::PackageManifest;

/// Lifecycle capability slots of a package
///
/// Every slot defaults to a no-op so packages only implement the phases they
/// care about.
pub trait PackageLifecycle: Send + Sync + fmt::Debug {
    /// Runs for every package in a plan before any package is installed
    fn pre_install(&self, _package: &Package, _archive: &Archive, _root: &Path) -> Result<()> {
        Ok(())
    }

    /// Installs the package's own payload
    fn install(&self, _package: &Package, _archive: &Archive, _root: &Path) -> Result<()> {
        Ok(())
    }

    /// Runs after module hooks have observed the install
    fn post_install(&self, _package: &Package, _archive: &Archive, _root: &Path) -> Result<()> {
        Ok(())
    }

    /// Removes the package's own payload
    fn uninstall(&self, _package: &Package, _root: &Path) -> Result<()> {
        Ok(())
    }
}

/// Lifecycle that does nothing in every phase
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLifecycle;

impl PackageLifecycle for NoopLifecycle {}

/// One installable unit
#[derive(Clone)]
pub struct Package {
    /// Unique name within a catalog
    pub name: String,

    /// Dotted `major.minor.patch` version
    pub version: String,

    /// Informational vendor string
    pub vendor: String,

    /// Dependency name to minimum required version
    pub dependencies: BTreeMap<String, String>,

    lifecycle: Arc<dyn PackageLifecycle>,
}

impl Package {
    /// Create a package without dependencies and with a no-op lifecycle
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        vendor: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            vendor: vendor.into(),
            dependencies: BTreeMap::new(),
            lifecycle: Arc::new(NoopLifecycle),
        }
    }

    /// Add a dependency on `name` at `min_version` or newer
    #[must_use]
    pub fn with_dependency(mut self, name: impl Into<String>, min_version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), min_version.into());
        self
    }

    /// Bind the lifecycle implementation used by the orchestrators
    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: Arc<dyn PackageLifecycle>) -> Self {
        self.lifecycle = lifecycle;
        self
    }

    pub fn lifecycle(&self) -> &dyn PackageLifecycle {
        self.lifecycle.as_ref()
    }

    /// Whether this package declares a dependency on `name`
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.contains_key(name)
    }

    /// Check descriptor invariants
    ///
    /// # Errors
    ///
    /// Returns `InvalidPackage` for a name that is not a safe path segment or
    /// a self-dependency, and `MalformedVersion` for unparseable versions.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(error::package::invalid(&self.name, "name cannot be empty"));
        }
        // Names become directory and file names under the deployment root
        if !self.name.chars().all(is_name_char) {
            return Err(error::package::invalid(
                &self.name,
                "names may only contain ASCII letters, digits, '-' and '_'",
            ));
        }

        Version::parse(&self.version)?;

        for (dependency, min_version) in &self.dependencies {
            if dependency == &self.name {
                return Err(error::package::invalid(
                    &self.name,
                    "a package cannot depend on itself",
                ));
            }
            Version::parse(min_version)?;
        }

        Ok(())
    }

    /// Serializable descriptor for this package
    pub fn manifest(&self) -> PackageManifest {
        PackageManifest {
            name: self.name.clone(),
            version: self.version.clone(),
            vendor: self.vendor.clone(),
            dependencies: self.dependencies.clone(),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl fmt::Debug for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Package")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("vendor", &self.vendor)
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
