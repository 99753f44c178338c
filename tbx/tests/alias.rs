//! # Tbx CLI Alias Integration Tests
//!
//! File: tbx/tests/alias.rs
//!
//! ## Overview
//!
//! Integration tests for `tbx alias`, with aliases defined in a temporary
//! user configuration file.
//!

mod common;
use common::*;
use predicates::prelude::*;
use tempfile::tempdir;

const CONFIG: &str = r#"
[env]
TBX_IT_GREETING = "hi"
TBX_IT_NAME = "there"

[aliases]
greet = "printenv TBX_IT_GREETING"
shout = "tr a-z A-Z"
"#;

#[test]
fn test_alias_runs_with_extra_args() {
    let tmp = tempdir().unwrap();
    write_config(tmp.path(), CONFIG);
    tbx_in(tmp.path())
        .args(["alias", "greet", "TBX_IT_NAME"])
        .assert()
        .success()
        .stdout("hi\nthere\n");
}

#[test]
fn test_alias_help_lists_aliases() {
    let tmp = tempdir().unwrap();
    write_config(tmp.path(), CONFIG);
    tbx_in(tmp.path())
        .args(["alias", "help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("greet").and(predicate::str::contains("shout")));
}

#[test]
fn test_alias_unknown() {
    let tmp = tempdir().unwrap();
    write_config(tmp.path(), CONFIG);
    tbx_in(tmp.path())
        .args(["alias", "nosuch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown subcommand 'nosuch'"));
}

#[test]
fn test_alias_missing_name() {
    let tmp = tempdir().unwrap();
    tbx_in(tmp.path())
        .arg("alias")
        .assert()
        .failure()
        .stderr(predicate::str::contains("subcommand required"));
}

#[test]
fn test_alias_invalid_config() {
    let tmp = tempdir().unwrap();
    write_config(tmp.path(), "[aliases]\n\"bad name\" = \"echo\"\n");
    tbx_in(tmp.path())
        .args(["alias", "help"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid alias name"));
}
