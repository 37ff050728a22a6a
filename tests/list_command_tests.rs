//! Roots and list command tests

mod common;

use predicates::prelude::*;

#[test]
fn test_list_shows_both_launchers() {
    let fixture = common::TestInstances::new();
    fixture.curseforge_instance("atm9", "All the Mods 9");
    fixture.prism_instance("vh3", "Vault Hunters");

    fixture
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Instances (2):"))
        .stdout(predicate::str::contains("All the Mods 9"))
        .stdout(predicate::str::contains("Vault Hunters"))
        .stdout(predicate::str::contains("Launcher: CurseForge"))
        .stdout(predicate::str::contains("Launcher: PrismLauncher"));
}

#[test]
fn test_list_filters_by_kind() {
    let fixture = common::TestInstances::new();
    fixture.curseforge_instance("atm9", "All the Mods 9");
    fixture.prism_instance("vh3", "Vault Hunters");

    fixture
        .cmd()
        .args(["list", "--kind", "prism"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault Hunters"))
        .stdout(predicate::str::contains("All the Mods 9").not());
}

#[test]
fn test_list_ignores_unrecognized_directories() {
    let fixture = common::TestInstances::new();
    fixture.curseforge_instance("atm9", "All the Mods 9");
    std::fs::create_dir_all(fixture.curseforge_root().join("not-an-instance"))
        .expect("Failed to create directory");

    fixture
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Instances (1):"))
        .stdout(predicate::str::contains("not-an-instance").not());
}

#[test]
fn test_list_empty() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No instances found."));
}

#[test]
fn test_list_json() {
    let fixture = common::TestInstances::new();
    fixture.prism_instance("vh3", "Vault Hunters");

    let output = fixture
        .cmd()
        .args(["list", "--json"])
        .output()
        .expect("Failed to run mcwarm");
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list --json should print JSON");
    let instances = parsed.as_array().expect("expected an array");
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0]["name"], "Vault Hunters");
    assert_eq!(instances[0]["kind"], "prism");
}

#[test]
fn test_list_extra_root_flag() {
    let fixture = common::TestInstances::new();
    let elsewhere = fixture.path.join("elsewhere");
    common::write_file(
        &elsewhere.join("Create").join("minecraftinstance.json"),
        br#"{"name": "Create Above and Beyond"}"#,
    );

    fixture
        .cmd()
        .arg("list")
        .arg("--root")
        .arg(&elsewhere)
        .assert()
        .success()
        .stdout(predicate::str::contains("Create Above and Beyond"));
}

#[test]
fn test_roots_lists_configured_directories() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching 2 directories:"))
        .stdout(predicate::str::contains("custom"));
}

#[test]
fn test_roots_none_found() {
    let fixture = common::TestInstances::new();
    std::fs::write(fixture.config_path(), "search_default_roots: false\n")
        .expect("Failed to write config");

    fixture
        .cmd()
        .arg("roots")
        .assert()
        .success()
        .stdout(predicate::str::contains("No launcher directories found."));
}
