//! Plan command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_plan_prints_install_order() {
    let deployment = common::TestDeployment::new();
    deployment.write_package("reports", "1.0.0", &[("ui", "1.0.0")]);
    deployment.write_package("ui", "1.0.0", &[("core", "1.0.0")]);
    deployment.write_package("core", "1.0.0", &[]);

    deployment
        .cmd()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install order (3 package(s)):"))
        .stdout(predicate::str::is_match(r"(?s)1\. core.*2\. ui.*3\. reports").unwrap());

    assert!(!deployment.file_exists(".modular"));
}

#[test]
fn test_plan_reports_missing_dependency() {
    let deployment = common::TestDeployment::new();
    deployment.write_package("core", "1.0.0", &[]);
    deployment.write_package("mail", "1.0.0", &[("calendar", "1.0.0")]);

    deployment
        .cmd()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot resolve package 'mail': dependency 'calendar' is not in the catalog",
        ));
}

#[test]
fn test_plan_reports_insufficient_version() {
    let deployment = common::TestDeployment::new();
    deployment.write_package("core", "1.5.0", &[]);
    deployment.write_package("ui", "1.0.0", &[("core", "2.0.0")]);

    deployment
        .cmd()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires >= 2.0.0, but the catalog has 1.5.0"));
}

#[test]
fn test_plan_rejects_malformed_version() {
    let deployment = common::TestDeployment::new();
    deployment.write_package("core", "1.x", &[]);

    deployment
        .cmd()
        .arg("plan")
        .assert()
        .failure()
        .stderr(predicate::str::contains("1.x"));
}
