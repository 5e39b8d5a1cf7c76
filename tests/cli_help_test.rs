//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("kondate")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shopping list builder"));
}

#[test]
fn test_list_help() {
    Command::cargo_bin("kondate")
        .unwrap()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--owned"))
        .stdout(predicate::str::contains("--no-pantry"));
}

#[test]
fn test_parse_help() {
    Command::cargo_bin("kondate")
        .unwrap()
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_extract_help() {
    Command::cargo_bin("kondate")
        .unwrap()
        .args(["extract", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESPONSE"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("kondate")
        .unwrap()
        .arg("install")
        .assert()
        .failure();
}
