//! Deployment configuration (modular.yaml)
//!
//! Optional file in the state directory. Every field has a default, so a
//! deployment without the file behaves like one with an empty file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Deployment config filename
pub const CONFIG_FILE: &str = "modular.yaml";

/// Built-in module hooks registered when the config names none
pub const DEFAULT_HOOKS: &[&str] = &["assets", "config"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Bundle directory used by `setup` when no archive is given
    pub packages_dir: String,

    /// Directory served to clients; holds assets and the client manifest
    pub public_dir: String,

    /// Directory receiving per-package configuration files
    pub config_dir: String,

    /// Module hook ids, in registration order
    pub hooks: Vec<String>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            packages_dir: "packages".to_string(),
            public_dir: "public".to_string(),
            config_dir: "config".to_string(),
            hooks: DEFAULT_HOOKS.iter().map(|h| (*h).to_string()).collect(),
        }
    }
}

impl DeploymentConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load the config from `state_dir`, falling back to defaults
    pub fn load(state_dir: &Path) -> Result<Self> {
        let path = state_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| error::config::parse_failed(path.display().to_string(), e.to_string()))
    }

    pub fn save(&self, state_dir: &Path) -> Result<()> {
        let path = state_dir.join(CONFIG_FILE);
        fs::write(&path, self.to_yaml()?).map_err(|e| error::fs::write_failed(&path, e))
    }
}
