//! End-to-end tests for the rote binary

mod common;

use assert_cmd::Command;
use common::create_test_manifest;
use predicates::prelude::*;
use std::fs;

fn rote() -> Command {
    Command::cargo_bin("rote").unwrap()
}

#[test]
fn test_runs_target_from_discovered_manifest() {
    let (dir, _manifest_path) = create_test_manifest(
        r#"
targets:
  build:
    run: touch built.txt
"#,
    );

    rote().current_dir(dir.path()).arg("build").assert().success();

    assert!(dir.path().join("built.txt").exists());
}

#[test]
fn test_unknown_target_fails_without_running_anything() {
    let (dir, _manifest_path) = create_test_manifest(
        r#"
targets:
  build:
    run: touch built.txt
"#,
    );

    rote()
        .current_dir(dir.path())
        .arg("package")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'package' is not defined"));

    assert!(!dir.path().join("built.txt").exists());
}

#[test]
fn test_failing_step_reports_exit_code_and_stops() {
    let (dir, _manifest_path) = create_test_manifest(
        r#"
targets:
  lint:
    run:
      - exit 2
      - touch after.txt
"#,
    );

    rote()
        .current_dir(dir.path())
        .arg("lint")
        .assert()
        .failure()
        .stderr(predicate::str::contains("exit code 2"));

    assert!(!dir.path().join("after.txt").exists());
}

#[test]
fn test_overlay_exported_to_spawned_commands() {
    let (dir, _manifest_path) = create_test_manifest(
        r#"
environment:
  RUST_LOG: info
targets:
  probe:
    run: printf '%s' "$RUST_LOG" > log_level.txt
"#,
    );

    // The overlay wins even when the caller's environment disagrees
    rote()
        .current_dir(dir.path())
        .env("RUST_LOG", "trace")
        .arg("probe")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("log_level.txt")).unwrap(),
        "info"
    );
}

#[test]
fn test_manifest_file_flag() {
    let (dir, manifest_path) = create_test_manifest(
        r#"
targets:
  greet:
    run: touch greeted.txt
"#,
    );

    rote()
        .arg("--file")
        .arg(&manifest_path)
        .arg("greet")
        .assert()
        .success();

    assert!(dir.path().join("greeted.txt").exists());
}

#[test]
fn test_help_lists_manifest_targets() {
    let (dir, _manifest_path) = create_test_manifest(
        r#"
targets:
  deploy:
    usage: Ship it
    run: "true"
"#,
    );

    rote()
        .current_dir(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy").and(predicate::str::contains("Ship it")));
}

#[test]
fn test_no_target_prints_help() {
    let (dir, _manifest_path) = create_test_manifest(
        r#"
targets:
  build:
    run: "true"
"#,
    );

    rote()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_quiet_suppresses_run_lines() {
    let (dir, _manifest_path) = create_test_manifest(
        r#"
targets:
  hush:
    run: "true"
"#,
    );

    rote()
        .current_dir(dir.path())
        .args(["-q", "hush"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[run]").not());
}
