//! # Tbx Command Modules
//!
//! File: tbx/src/commands/mod.rs
//!
//! ## Overview
//!
//! The subcommands of the `tbx` binary. Each module defines a `clap` args
//! struct and a `handle_*` function that calls into the `tbx` library and
//! prints the result:
//!
//! - `run`: run a command with input/output redirection
//! - `git`: repository queries (tag, hash, branch, status)
//! - `path`: path helpers (abs, base, dir, expand, glob, mkdir, exists)
//! - `contents`: print a file as text or as a split list
//! - `alias`: run command aliases from the configuration
//!

/// `tbx alias`: configured command aliases.
pub mod alias;
/// `tbx contents`: file contents as text or list.
pub mod contents;
/// `tbx git`: repository queries.
pub mod git;
/// `tbx path`: path helpers.
pub mod path;
/// `tbx run`: command execution with redirection.
pub mod run;
