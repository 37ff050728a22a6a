//! Error reporting tests

mod common;

use predicates::prelude::*;

#[test]
fn test_unknown_instance() {
    let fixture = common::TestInstances::new();
    fixture.curseforge_instance("atm9", "All the Mods 9");

    fixture
        .cmd()
        .args(["plan", "Nonexistent Pack"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Instance 'Nonexistent Pack' not found",
        ));
}

#[test]
fn test_missing_extra_root() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .args(["list", "--root"])
        .arg(fixture.path.join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Root directory not found"));
}

#[test]
fn test_malformed_config() {
    let fixture = common::TestInstances::new();
    std::fs::write(fixture.config_path(), "selection: [not, a, map]\n")
        .expect("Failed to write config");

    fixture
        .cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_missing_explicit_config() {
    let fixture = common::TestInstances::new();
    fixture
        .cmd()
        .arg("list")
        .arg("--config")
        .arg(fixture.path.join("nope.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read configuration file"));
}

#[test]
fn test_zero_jobs_rejected() {
    let fixture = common::TestInstances::new();
    fixture.curseforge_instance("atm9", "All the Mods 9");

    fixture
        .cmd()
        .args(["warm", "atm9", "--jobs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_negative_max_gb_rejected() {
    let fixture = common::TestInstances::new();
    fixture.curseforge_instance("atm9", "All the Mods 9");

    fixture
        .cmd()
        .args(["plan", "atm9", "--max-gb=-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--max-gb must be a positive number"));
}
