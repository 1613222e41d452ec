//! Single package install tests

mod common;

use predicates::prelude::*;

#[test]
fn test_install_into_existing_deployment() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();

    let audit = deployment.write_standalone_package("audit", "1.0.0", &[("core", "1.0.0")]);
    std::fs::create_dir_all(audit.join("files/audit")).unwrap();
    std::fs::write(audit.join("files/audit/rules.txt"), "deny all\n").unwrap();

    deployment
        .cmd()
        .arg("install")
        .arg(&audit)
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed audit@1.0.0"));

    assert_eq!(deployment.read_file("audit/rules.txt"), "deny all\n");
    assert!(deployment.read_file("public/manifest.json").contains("\"audit\""));
    deployment
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed packages (4):"));
}

#[test]
fn test_install_missing_dependency_fails() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();
    let mail = deployment.write_standalone_package("mail", "1.0.0", &[("calendar", "1.0.0")]);

    deployment
        .cmd()
        .arg("install")
        .arg(&mail)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Package 'mail' requires 'calendar' which is not installed",
        ))
        .stderr(predicate::str::contains("Help:"));

    deployment
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("mail").not());
}

#[test]
fn test_install_version_mismatch_fails() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();
    let charts = deployment.write_standalone_package("charts", "1.0.0", &[("ui", "2.0.0")]);

    deployment
        .cmd()
        .arg("install")
        .arg(&charts)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "requires 'ui' >= 2.0.0, but 1.0.0 is installed",
        ));
}

#[test]
fn test_install_already_installed_fails() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();
    let ui = deployment.write_standalone_package("ui", "1.1.0", &[("core", "1.0.0")]);

    deployment
        .cmd()
        .arg("install")
        .arg(&ui)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package 'ui' is already installed"));
}

#[test]
fn test_install_dry_run_checks_dependencies_only() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();
    let audit = deployment.write_standalone_package("audit", "1.0.0", &[("core", "1.0.0")]);

    deployment
        .cmd()
        .args(["install", "--dry-run"])
        .arg(&audit)
        .assert()
        .success()
        .stdout(predicate::str::contains("would install audit@1.0.0"));

    assert!(!deployment.file_exists(".modular/files/audit.json"));
}

#[test]
fn test_install_requires_deployment() {
    let deployment = common::TestDeployment::new();
    let audit = deployment.write_standalone_package("audit", "1.0.0", &[]);

    deployment
        .cmd()
        .arg("install")
        .arg(&audit)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deployment not found"))
        .stderr(predicate::str::contains("modular setup"));
}

#[test]
fn test_install_rejects_bundle_archive() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();
    deployment.setup();

    deployment
        .cmd()
        .arg("install")
        .arg(deployment.temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid installer archive"));
}
