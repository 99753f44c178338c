//! # Tbx
//!
//! File: tbx/src/lib.rs
//!
//! ## Overview
//!
//! A personal toolbox of wrappers around everyday operating-system chores:
//! running commands with flexible redirection, scoping environment
//! variables and working directories, reading files, manipulating paths,
//! asking git simple questions, and dispatching subcommands for small tools.
//!
//! ## Layout
//!
//! - [`common`]: the helpers themselves (`process`, `system`, `fs`, `git`, `util`)
//! - [`core`]: errors, configuration and the dispatch helper
//!
//! The most used items are re-exported at the crate root:
//!
//! ```rust
//! use tbx::{run, Input, Output};
//!
//! # fn main() -> tbx::Result<()> {
//! let out = run("cat", "hello\n", Output::Capture)?;
//! assert_eq!(out.as_deref(), Some("hello\n"));
//!
//! let piped = run("echo diverted", Input::Empty, "| cat")?;
//! assert!(piped.unwrap().contains("diverted"));
//! # Ok(())
//! # }
//! ```
//!
pub mod common;
pub mod core;

pub use common::process::{capture, run, CommandLine, Input, Outcome, Output, Pipeline, Runner};
pub use core::error::{Result, TbxError};
