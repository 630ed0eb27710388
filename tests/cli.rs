//! Command-line tests for the codefmt binary
//!
//! These tests run the built executable over temporary trees and check its
//! output, exit status and the files it leaves behind.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const LEGACY_FILE: &str = "/*\n * Problem: Two Sum\n * Date: 03/03/2020\n */\nf() {\n    g();\n}\n";

fn cmd() -> Command {
    Command::cargo_bin("codefmt").unwrap()
}

fn tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel, contents) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    dir
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_reports_and_rewrites_files() {
    let dir = tree(&[("src/a.cs", LEGACY_FILE)]);
    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("a.cs: indent, docu"))
        .stdout(contains("1 file modified (1 checked); extensions: cs"));
    let rewritten = read(dir.path(), "src/a.cs");
    assert!(rewritten.contains("* Title : Two Sum\n"));
    assert!(rewritten.contains("* Date  : 2020-03-03\n"));
    assert!(rewritten.contains("\n  g();\n"));
}

#[test]
fn test_simulate_does_not_write() {
    let dir = tree(&[("a.cs", LEGACY_FILE)]);
    cmd()
        .args(["--simulate"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("a.cs: indent, docu (simulated)"))
        .stderr(contains("Simulating"));
    assert_eq!(read(dir.path(), "a.cs"), LEGACY_FILE);
}

#[test]
fn test_clean_tree_reports_nothing() {
    let dir = tree(&[("a.cs", LEGACY_FILE)]);
    cmd().arg(dir.path()).assert().success();
    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("No files needed changes (1 checked)."));
}

#[test]
fn test_unknown_key_aborts_with_failure() {
    let dir = tree(&[("a.cs", "/*\n * Mystery: value\n */\n")]);
    cmd()
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("unrecognized key `Mystery`"))
        .stdout(contains("modified").not());
}

#[test]
fn test_stage_flags_disable_rewrites() {
    let dir = tree(&[("a.cs", LEGACY_FILE)]);
    cmd()
        .args(["--no-docu", "--no-indent"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("No files needed changes"));
    assert_eq!(read(dir.path(), "a.cs"), LEGACY_FILE);
}

#[test]
fn test_indent_width_flag_sets_target() {
    let dir = tree(&[("a.cs", LEGACY_FILE)]);
    cmd()
        .args(["-w", "8", "--no-docu"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("a.cs: indent"));
    assert!(read(dir.path(), "a.cs").contains("\n        g();\n"));
}

#[test]
fn test_skip_extension_flag() {
    let dir = tree(&[("a.cs", "no block here\n"), ("b.cpp", LEGACY_FILE)]);
    cmd()
        .args(["-x", "cs"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("b.cpp: indent, docu"));
}

#[test]
fn test_discovered_config_file_applies() {
    let dir = tree(&[
        ("codefmt.toml", "indent_width = 4\nfix_docu = false\n"),
        ("src/a.cs", "f() {\n  g();\n}\n"),
    ]);
    cmd()
        .arg(dir.path().join("src"))
        .assert()
        .success()
        .stdout(contains("a.cs: indent"));
    assert_eq!(read(dir.path(), "src/a.cs"), "f() {\n    g();\n}\n");
}

#[test]
fn test_explicit_config_file_is_validated() {
    let config = tree(&[("bad.toml", "indent_width = 0\n")]);
    let dir = tree(&[("a.cs", LEGACY_FILE)]);
    cmd()
        .arg("--config")
        .arg(config.path().join("bad.toml"))
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"));
}

#[test]
fn test_missing_path_fails() {
    cmd()
        .arg("/nonexistent/codefmt/input")
        .assert()
        .failure()
        .stderr(contains("path does not exist"));
}
