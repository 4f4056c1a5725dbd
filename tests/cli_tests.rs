//! Binary-level tests for the Hourglass CLI.
//!
//! These tests run the compiled binary and verify argument handling and
//! error paths that do not need a live daemon.

use assert_cmd::Command;
use predicates::prelude::*;

/// Builds a command with HOME pointed at an empty directory so no stray
/// daemon socket can be reached.
fn hourglass() -> (Command, tempfile::TempDir) {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("hourglass").unwrap();
    cmd.env("HOME", home.path());
    (cmd, home)
}

#[test]
fn test_help_lists_commands() {
    let (mut cmd, _home) = hourglass();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("cancel"))
        .stdout(predicate::str::contains("reset"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("daemon"));
}

#[test]
fn test_no_args_prints_help() {
    let (mut cmd, _home) = hourglass();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    let (mut cmd, _home) = hourglass();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hourglass"));
}

#[test]
fn test_completions_bash() {
    let (mut cmd, _home) = hourglass();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hourglass"));
}

#[test]
fn test_select_rejects_out_of_range_minutes() {
    let (mut cmd, _home) = hourglass();
    cmd.args(["select", "-M", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("60"));
}

#[test]
fn test_select_rejects_out_of_range_hours() {
    let (mut cmd, _home) = hourglass();
    cmd.args(["select", "-H", "100"]).assert().failure();
}

#[test]
fn test_unknown_command_fails() {
    let (mut cmd, _home) = hourglass();
    cmd.arg("unknown").assert().failure();
}

#[test]
fn test_status_without_daemon_fails() {
    let (mut cmd, _home) = hourglass();
    cmd.arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
