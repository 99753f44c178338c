//! # Tbx Process Execution Utilities (`common::process`)
//!
//! File: tbx/src/common/process/mod.rs
//!
//! ## Overview
//!
//! Running external commands with flexible input and output redirection.
//! A command line is tokenized with POSIX shell rules, its input and output
//! specifiers are resolved to concrete sources and sinks, the child (or
//! pipeline of children) is spawned, and the combined stdout+stderr is
//! returned as text unless it was diverted elsewhere.
//!
//! ## Architecture
//!
//! - **`command`**: `CommandLine` tokenization and unquoted-`|` splitting.
//! - **`redirect`**: the `Input` and `Output` specifier enums and their string notation.
//! - **`pipeline`**: `Pipeline`, which spawns and wires stages and collects `Outcome`s.
//! - **`runner`**: `Runner` plus the `run` / `capture` shortcuts that resolve specifiers.
//!
//! ## Usage
//!
//! ```rust
//! use tbx::common::process::{run, Input, Output, Runner};
//!
//! # fn main() -> tbx::Result<()> {
//! // Capture combined output.
//! let text = run("echo hello", Input::Empty, Output::Capture)?.unwrap_or_default();
//! assert!(text.contains("hello"));
//!
//! // Chain: feed the output of one command into another.
//! let text = run("tr a-z A-Z", "echo shout |", Output::Capture)?.unwrap_or_default();
//! assert_eq!(text, "SHOUT\n");
//!
//! // Keep the exit status instead of dropping it.
//! let outcome = Runner::new().execute("false", Input::Empty, Output::Capture)?;
//! assert!(!outcome.success());
//! # Ok(())
//! # }
//! ```
//!
//! Calls block until every spawned process has exited; there is no timeout.
//!

/// Command-line tokenization (`CommandLine`).
pub mod command;
/// Multi-stage pipelines and their outcomes.
pub mod pipeline;
/// Input and output redirection specifiers.
pub mod redirect;
/// The command runner and its shortcuts.
pub mod runner;

pub use command::CommandLine;
pub use pipeline::{Outcome, Pipeline};
pub use redirect::{Input, Output};
pub use runner::{capture, run, Runner};
