//! Common test utilities for modular integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A deployment root in a temporary directory
pub struct TestDeployment {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to deployment root
    pub path: PathBuf,
}

impl TestDeployment {
    /// Create a new, empty deployment root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("deployment");
        std::fs::create_dir_all(&path).expect("Failed to create deployment root");
        Self { temp, path }
    }

    /// Write a package descriptor to `<dir>/<name>/package.yaml`
    pub fn write_package_in(dir: &Path, name: &str, version: &str, deps: &[(&str, &str)]) -> PathBuf {
        let package_dir = dir.join(name);
        std::fs::create_dir_all(&package_dir).expect("Failed to create package directory");

        let mut yaml = format!("name: {name}\nversion: \"{version}\"\nvendor: Acme\n");
        if !deps.is_empty() {
            yaml.push_str("dependencies:\n");
            for (dep, min) in deps {
                yaml.push_str(&format!("  {dep}: \"{min}\"\n"));
            }
        }
        std::fs::write(package_dir.join("package.yaml"), yaml).expect("Failed to write package.yaml");
        package_dir
    }

    /// Write a package into the deployment's packages directory
    pub fn write_package(&self, name: &str, version: &str, deps: &[(&str, &str)]) -> PathBuf {
        Self::write_package_in(&self.path.join("packages"), name, version, deps)
    }

    /// Write a package outside the deployment, for single installs
    pub fn write_standalone_package(&self, name: &str, version: &str, deps: &[(&str, &str)]) -> PathBuf {
        Self::write_package_in(&self.temp.path().join("incoming"), name, version, deps)
    }

    /// Core, ui (core) and reports (ui), each shipping one file
    pub fn write_standard_packages(&self) {
        self.write_package("core", "1.0.0", &[]);
        self.write_package("ui", "1.0.0", &[("core", "1.0.0")]);
        self.write_package("reports", "1.0.0", &[("ui", "1.0.0")]);
        self.write_file("packages/core/files/bin/core.sh", "echo core\n");
        self.write_file("packages/ui/files/ui/index.html", "<html></html>\n");
        self.write_file("packages/reports/files/reports/daily.sql", "select 1;\n");
    }

    /// Write a file relative to the deployment root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the deployment root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists relative to the deployment root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Command for the modular binary, rooted at this deployment
    pub fn cmd(&self) -> Command {
        let mut cmd = modular_cmd();
        cmd.arg("--root").arg(&self.path);
        cmd
    }

    /// Set up a deployment with nothing to install
    pub fn setup_empty(&self) {
        std::fs::create_dir_all(self.path.join("packages")).expect("Failed to create packages dir");
        self.setup();
    }

    /// Run `setup` and assert success
    pub fn setup(&self) {
        self.cmd().arg("setup").assert().success();
    }
}

#[allow(deprecated)]
pub fn modular_cmd() -> Command {
    let mut cmd = Command::cargo_bin("modular").expect("modular binary");
    // Always ignore any developer overrides during tests
    cmd.env_remove("MODULAR_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
