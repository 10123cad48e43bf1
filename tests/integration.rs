// Integration tests for the portfolio-score CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify argument
// handling, exit codes and help output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the portfolio-score binary.
fn portfolio_score() -> Command {
    Command::cargo_bin("portfolio-score").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    portfolio_score()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio-score"));
}

#[test]
fn cli_help_flag() {
    portfolio_score()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Developer portfolio scoring"));
}

#[test]
fn score_requires_profile_path() {
    portfolio_score()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn rank_requires_at_least_one_profile() {
    portfolio_score()
        .arg("rank")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn insights_requires_response_file() {
    portfolio_score()
        .args(["insights", "profile.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--response"));
}

#[test]
fn verbose_and_quiet_conflict() {
    portfolio_score()
        .args(["-v", "-q", "username", "octocat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
