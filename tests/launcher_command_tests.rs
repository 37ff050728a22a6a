//! Open and detect command tests

mod common;

use predicates::prelude::*;

#[cfg(unix)]
#[test]
fn test_open_with_explicit_command() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .args(["open", "curseforge", "--command", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened CurseForge"));
}

#[cfg(unix)]
#[test]
fn test_open_uses_configured_command() {
    let fixture = common::TestInstances::new();
    fixture.write_config("launch:\n  command: 'true'\n");

    fixture
        .cmd()
        .args(["open", "prism"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened PrismLauncher"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_open_without_launcher_fails() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .env("PATH", fixture.path.join("empty-bin"))
        .args(["open", "curseforge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CurseForge was not found"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_open_instance_template_is_not_used() {
    let fixture = common::TestInstances::new();
    fixture.write_config("launch:\n  command: 'true --launch {instance}'\n");

    fixture
        .cmd()
        .env("PATH", fixture.path.join("empty-bin"))
        .args(["open", "prism"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PrismLauncher was not found"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_detect_missing_launcher() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .env("PATH", fixture.path.join("empty-bin"))
        .args(["detect", "prism"])
        .assert()
        .failure()
        .code(1);
}
