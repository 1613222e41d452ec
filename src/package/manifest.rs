//! Package descriptor file (package.yaml)
//!
//! ```yaml
//! name: reports
//! version: 1.2.0
//! vendor: Acme
//! dependencies:
//!   core: 1.0.0
//!   ui: "1.1"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, de};

use super::Package;
use crate::error::{self, Result};

/// Descriptor filename inside a package directory
pub const PACKAGE_FILE: &str = "package.yaml";

/// Serializable form of a package descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,

    #[serde(deserialize_with = "deserialize_version")]
    pub version: String,

    #[serde(default)]
    pub vendor: String,

    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "deserialize_dependencies"
    )]
    pub dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Parse a descriptor from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(yaml)?;
        Ok(manifest)
    }

    /// Load a descriptor from a `package.yaml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            error::config::read_failed(path.display().to_string(), e.to_string())
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Validate and convert into a [`Package`] with a no-op lifecycle
    pub fn into_package(self) -> Result<Package> {
        let mut package = Package::new(self.name, self.version, self.vendor);
        package.dependencies = self.dependencies;
        package.validate()?;
        Ok(package)
    }
}

/// Read a version scalar without losing its text
///
/// YAML reads unquoted `1.10` as the float `1.1`, so decimal numbers are
/// rejected. Plain integers such as `2` are exact and accepted.
fn version_text<E: de::Error>(value: serde_yaml::Value) -> std::result::Result<String, E> {
    match value {
        serde_yaml::Value::String(text) => Ok(text),
        serde_yaml::Value::Number(n) if n.is_u64() => Ok(n.to_string()),
        serde_yaml::Value::Number(n) => Err(E::custom(format!(
            "version {n} was read as a number; quote it, e.g. \"1.10\""
        ))),
        other => Err(E::custom(format!(
            "expected a version string, found {other:?}"
        ))),
    }
}

fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    version_text(serde_yaml::Value::deserialize(deserializer)?)
}

fn deserialize_dependencies<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_yaml::Value>> = Option::deserialize(deserializer)?;
    raw.unwrap_or_default()
        .into_iter()
        .map(|(name, value)| version_text(value).map(|version| (name, version)))
        .collect()
}
