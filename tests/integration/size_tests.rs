//! Tests around the recursive size report.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{dirusage_command, write_file};

#[test]
fn test_nested_tree_size() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_file(&root.join("a"), 100);
    write_file(&root.join("b").join("c"), 50);

    dirusage_command(&["--size", "--bytes", root.to_str().unwrap()])
        .assert()
        .success()
        .stdout("size: 150\n");
}

#[test]
fn test_single_file_size() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("only");
    write_file(&file, 2048);

    dirusage_command(&["-s", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout("size: 2.0KiB\n");
}

#[test]
fn test_size_json() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("x").join("y").join("z"), 12);
    std::fs::create_dir(dir.path().join("empty")).unwrap();

    dirusage_command(&["--size", "--json", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("{\"size\":12}\n");
}

#[test]
fn test_broken_descendant_fails_without_partial_size() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_file(&root.join("big"), 4096);
    std::fs::create_dir(root.join("sub")).unwrap();
    std::os::unix::fs::symlink(root.join("nowhere"), root.join("sub").join("dangling")).unwrap();

    dirusage_command(&["--size", "--bytes", root.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("dangling"));
}
