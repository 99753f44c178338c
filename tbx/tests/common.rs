//! # Tbx CLI Integration Test Common Helpers
//!
//! File: tbx/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `tbx/tests/`. Every test file
//! declares `mod common;` and drives the compiled `tbx` binary through
//! `assert_cmd`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// # Get Tbx Command (`tbx_cmd`)
///
/// An `assert_cmd::Command` for the compiled `tbx` binary.
///
/// ## Panics
/// Panics if the `tbx` binary cannot be found via `Command::cargo_bin`.
pub fn tbx_cmd() -> Command {
    Command::cargo_bin("tbx").expect("Failed to find tbx binary for testing")
}

/// # Isolated Tbx Command (`tbx_in`)
///
/// A `tbx` command running in `dir`, reading its user configuration from
/// `dir/config.toml` (written empty if missing) instead of the real one.
pub fn tbx_in(dir: &Path) -> Command {
    let config = dir.join("config.toml");
    if !config.exists() {
        fs::write(&config, "").expect("Failed to write empty test config");
    }
    let mut cmd = tbx_cmd();
    cmd.current_dir(dir).env("TBX_CONFIG", &config);
    cmd
}

/// Writes `content` as the test user configuration in `dir`.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let config = dir.join("config.toml");
    fs::write(&config, content).expect("Failed to write test config");
    config
}
