//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::dirusage_command;

#[test]
fn test_capacity_and_size_conflict() {
    dirusage_command(&["--capacity", "--size", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unknown_flag() {
    dirusage_command(&["--frobnicate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_help() {
    dirusage_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report Options"))
        .stdout(predicate::str::contains("--capacity"));
}

#[test]
fn test_version() {
    dirusage_command(&["-V"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist");

    dirusage_command(&["--size", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to measure"))
        .stderr(predicate::str::contains("open failed"));
}
