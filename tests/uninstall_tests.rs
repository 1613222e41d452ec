//! Uninstall command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_uninstall_removes_dependents_first() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();

    deployment
        .cmd()
        .args(["uninstall", "core"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled 3 package(s):"))
        .stdout(predicate::str::is_match(r"(?s)reports.*ui.*core").unwrap());

    assert!(!deployment.file_exists("bin/core.sh"));
    assert!(!deployment.file_exists("ui/index.html"));
    assert!(!deployment.file_exists(".modular/files/core.json"));
    deployment
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No packages installed."));
}

#[test]
fn test_uninstall_leaf_keeps_dependencies() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();

    deployment
        .cmd()
        .args(["uninstall", "reports"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Uninstalled 1 package(s):"));

    assert!(!deployment.file_exists("reports/daily.sql"));
    assert!(deployment.file_exists("ui/index.html"));

    let manifest = deployment.read_file("public/manifest.json");
    assert!(manifest.contains("\"ui\""));
    assert!(!manifest.contains("\"reports\""));
}

#[test]
fn test_uninstall_runs_hooks() {
    let deployment = common::TestDeployment::new();
    deployment.write_package("ui", "1.0.0", &[]);
    deployment.write_file("packages/ui/assets/app.js", "app\n");
    deployment.write_file("packages/ui/config.yaml", "theme: dark\n");
    deployment.setup();
    assert!(deployment.file_exists("public/ui/app.js"));

    deployment.cmd().args(["uninstall", "ui"]).assert().success();

    assert!(!deployment.file_exists("public/ui"));
    assert!(!deployment.file_exists("config/ui.yaml"));
}

#[test]
fn test_uninstall_keeps_locally_modified_files() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();
    deployment.write_file("bin/core.sh", "echo patched\n");

    deployment.cmd().args(["uninstall", "core"]).assert().success();

    assert_eq!(deployment.read_file("bin/core.sh"), "echo patched\n");
}

#[test]
fn test_uninstall_dry_run() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();

    deployment
        .cmd()
        .args(["uninstall", "ui", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would uninstall 2 package(s):"))
        .stdout(predicate::str::is_match(r"(?s)reports.*ui").unwrap());

    assert!(deployment.file_exists("reports/daily.sql"));
}

#[test]
fn test_uninstall_unknown_package() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();

    deployment
        .cmd()
        .args(["uninstall", "calendar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package 'calendar' is not installed"));
}
