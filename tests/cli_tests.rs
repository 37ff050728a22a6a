//! CLI surface tests: help, version and completions

mod common;

use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("roots"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("warm"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mcwarm"));
}

#[test]
fn test_version_command() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("Launchers: CurseForge, PrismLauncher"));
}

#[test]
fn test_completions_bash() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mcwarm"));
}

#[test]
fn test_completions_unknown_shell() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'tcsh'"));
}

#[test]
fn test_missing_subcommand_fails() {
    let fixture = common::TestInstances::new();
    fixture.cmd().assert().failure();
}

#[test]
fn test_launch_cmd_requires_launch() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .args(["warm", "pack", "--launch-cmd", "true"])
        .assert()
        .failure();
}
