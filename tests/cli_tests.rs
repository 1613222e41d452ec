//! General CLI behavior tests

mod common;

use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    common::modular_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("create-installer"))
        .stdout(predicate::str::contains("uninstall"));
}

#[test]
fn test_version_command() {
    common::modular_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    common::modular_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modular"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    common::modular_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tcsh"));
}

#[test]
fn test_unknown_command_fails() {
    common::modular_cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_root_from_environment() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();

    common::modular_cmd()
        .env("MODULAR_ROOT", &deployment.path)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Install order (3 package(s)):"));
}

#[test]
fn test_root_defaults_to_current_dir() {
    let deployment = common::TestDeployment::new();
    deployment.write_standard_packages();

    common::modular_cmd()
        .current_dir(&deployment.path)
        .arg("setup")
        .assert()
        .success();

    assert!(deployment.file_exists(".modular/installed.json"));
}

#[test]
fn test_errors_go_to_stderr_with_exit_code() {
    let deployment = common::TestDeployment::new();

    deployment
        .cmd()
        .args(["uninstall", "core"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error:"));
}
