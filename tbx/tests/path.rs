//! # Tbx CLI Path Integration Tests
//!
//! File: tbx/tests/path.rs
//!
//! ## Overview
//!
//! Integration tests for `tbx path` and `tbx contents`.
//!

mod common;
use common::*;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_path_base_and_dir() {
    tbx_cmd()
        .args(["path", "base", "-n", "2", "/a/b/c/d"])
        .assert()
        .success()
        .stdout("c/d\n");
    tbx_cmd()
        .args(["path", "dir", "-n", "2", "/a/b/c/d"])
        .assert()
        .success()
        .stdout("/a/b\n");
    tbx_cmd()
        .args(["path", "dir", "////"])
        .assert()
        .success()
        .stdout("////\n");
}

#[test]
fn test_path_expand() {
    tbx_cmd()
        .args(["path", "expand", "~/$TBX_IT_SUB"])
        .env("HOME", "/home/dir")
        .env("TBX_IT_SUB", "value")
        .assert()
        .success()
        .stdout("/home/dir/value\n");
}

#[test]
fn test_path_abs() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    tbx_cmd()
        .current_dir(&root)
        .args(["path", "abs", "./x/../testfile"])
        .assert()
        .success()
        .stdout(format!("{}\n", root.join("testfile").display()));
}

#[test]
fn test_path_mkdir_exists_glob() {
    let tmp = tempdir().unwrap();
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["path", "mkdir", "one/two"])
        .assert()
        .success();
    assert!(tmp.path().join("one/two").is_dir());

    tbx_cmd()
        .current_dir(tmp.path())
        .args(["path", "exists", "one/two"])
        .assert()
        .success()
        .stdout("true\n");

    fs::write(tmp.path().join("abc"), "").unwrap();
    fs::write(tmp.path().join("arb"), "").unwrap();
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["path", "glob", "*b", "a*"])
        .assert()
        .success()
        .stdout("arb\nabc\n");
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["path", "glob", "--duplicates", "*b", "a*"])
        .assert()
        .success()
        .stdout("arb\nabc\narb\n");
}

#[test]
fn test_path_mkdir_over_file() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("file"), "").unwrap();
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["path", "mkdir", "file"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_contents_list_with_separators() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("data"), "a,b;c").unwrap();
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["contents", "-f", "list", "--sep", ",", "--sep", ";", "data"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");
}

#[test]
fn test_contents_default_and_errors() {
    let tmp = tempdir().unwrap();
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["contents", "--default", "fallback", "missing"])
        .assert()
        .success()
        .stdout("fallback");
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["contents", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No such file or directory"));
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["contents", "-f", "table", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["contents", "--sep", ",", "--default", "x", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Non-default separator is only valid for list format",
        ));
}
