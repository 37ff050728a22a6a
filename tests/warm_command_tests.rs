//! Warm command tests

mod common;

use predicates::prelude::*;

fn small_pack(fixture: &common::TestInstances) -> std::path::PathBuf {
    let root = fixture.curseforge_instance("atm9", "All the Mods 9");
    common::write_sized(&root.join("mods").join("a.jar"), 2048);
    common::write_sized(&root.join("mods").join("b.jar"), 1024);
    common::write_sized(&root.join("config").join("c.toml"), 10);
    root
}

#[test]
fn test_warm_reads_planned_files() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);

    fixture
        .cmd()
        .args(["warm", "atm9", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All the Mods 9: warmed"))
        .stdout(predicate::str::contains("in 3 file(s)"));
}

#[test]
fn test_warm_parallel_jobs() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);

    fixture
        .cmd()
        .args(["warm", "atm9", "--jobs", "3", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in 3 file(s)"));
}

#[test]
fn test_warm_dry_run() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);

    fixture
        .cmd()
        .args(["warm", "atm9", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would warm 3.0 KB in 3 file(s)"))
        .stderr(predicate::str::contains("Planning 3 file(s)"));
}

#[test]
fn test_warm_dry_run_from_config() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);
    fixture.write_config("execution:\n  dry_run: true\n  jobs: 1\n");

    fixture
        .cmd()
        .args(["warm", "atm9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would warm"));
}

#[test]
fn test_warm_multiple_instances() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);
    let game_dir = fixture.prism_instance("vh3", "Vault Hunters");
    common::write_sized(&game_dir.join("mods").join("v.jar"), 100);

    fixture
        .cmd()
        .args(["warm", "atm9", "Vault Hunters", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All the Mods 9: warmed"))
        .stdout(predicate::str::contains("Vault Hunters: warmed"));
}

#[test]
fn test_warm_empty_instance_fails() {
    let fixture = common::TestInstances::new();
    fixture.curseforge_instance("empty", "Empty Pack");

    fixture
        .cmd()
        .args(["warm", "Empty Pack"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to warm"));
}

#[test]
fn test_warm_skips_empty_instance_among_others() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);
    fixture.curseforge_instance("empty", "Empty Pack");

    fixture
        .cmd()
        .args(["warm", "Empty Pack", "atm9", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All the Mods 9: warmed"))
        .stderr(predicate::str::contains("Nothing to warm for instance 'Empty Pack'"));
}

#[test]
fn test_warm_file_bound() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);

    fixture
        .cmd()
        .args(["warm", "atm9", "--max-files", "1", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in 1 file(s)"))
        .stdout(predicate::str::contains("2 file(s) left out by limits"));
}

#[test]
fn test_warm_byte_limit_covers_all_instances() {
    let fixture = common::TestInstances::new();
    let a = fixture.curseforge_instance("pack-a", "Pack A");
    common::write_sized(&a.join("mods").join("a.jar"), 1000);
    let b = fixture.curseforge_instance("pack-b", "Pack B");
    common::write_sized(&b.join("mods").join("b.jar"), 1000);

    fixture
        .cmd()
        .args(["warm", "Pack A", "Pack B", "--max-bytes", "1500", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pack A: warmed 1000 B"))
        .stdout(predicate::str::contains("Pack B: warmed").not())
        .stdout(predicate::str::contains(
            "Total warmed 1000 B in 1 file(s) across 1 instance(s)",
        ))
        .stderr(predicate::str::contains("Nothing to warm for instance 'Pack B'"));
}

#[test]
fn test_warm_prints_run_total() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);
    let game_dir = fixture.prism_instance("vh3", "Vault Hunters");
    common::write_sized(&game_dir.join("mods").join("v.jar"), 1024);

    fixture
        .cmd()
        .args(["warm", "atm9", "vh3", "--dry-run", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total would warm 4.0 KB in 4 file(s) across 2 instance(s)",
        ));
}

#[cfg(unix)]
#[test]
fn test_warm_then_launch_custom_command() {
    let fixture = common::TestInstances::new();
    small_pack(&fixture);

    fixture
        .cmd()
        .args(["warm", "atm9", "--quiet", "--launch", "--launch-cmd", "true {instance}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Launched All the Mods 9"));
}
