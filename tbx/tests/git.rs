//! # Tbx CLI Git Integration Tests
//!
//! File: tbx/tests/git.rs
//!
//! ## Overview
//!
//! Integration tests for `tbx git` against a freshly initialised repository.
//! Requires `git` on the PATH.
//!

mod common;
use common::*;
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;
use tempfile::tempdir;

fn git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(["-c", "user.name=Tbx", "-c", "user.email=tbx@example.com"])
        .args(["-c", "commit.gpgsign=false"])
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(status.status.success(), "git {:?} failed", args);
}

fn init_repo(dir: &Path) {
    git(dir, &["init", "-q"]);
    git(dir, &["checkout", "-q", "-b", "trunk"]);
    fs::write(dir.join("tracked"), "one\n").unwrap();
    git(dir, &["add", "tracked"]);
    git(dir, &["commit", "-q", "-m", "initial"]);
    git(dir, &["tag", "v0.1"]);
}

#[test]
fn test_git_branch_and_tag() {
    let tmp = tempdir().unwrap();
    init_repo(tmp.path());
    tbx_cmd()
        .args(["git", "-C"])
        .arg(tmp.path())
        .arg("branch")
        .assert()
        .success()
        .stdout("trunk\n");
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["git", "tag"])
        .assert()
        .success()
        .stdout("v0.1\n");
}

#[test]
fn test_git_hash_and_status() {
    let tmp = tempdir().unwrap();
    init_repo(tmp.path());
    let head = StdCommand::new("git")
        .args(["rev-parse", "HEAD"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    let head = String::from_utf8(head.stdout).unwrap();

    tbx_cmd()
        .current_dir(tmp.path())
        .args(["git", "hash"])
        .assert()
        .success()
        .stdout(format!("{}\n", head.trim()));

    fs::write(tmp.path().join("tracked"), "two\n").unwrap();
    fs::write(tmp.path().join("loose"), "").unwrap();
    tbx_cmd()
        .current_dir(tmp.path())
        .args(["git", "status"])
        .assert()
        .success()
        .stdout("unstaged: tracked\nuntracked: loose\n");
}
