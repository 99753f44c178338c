//! # Tbx Common Utilities (`common`)
//!
//! File: tbx/src/common/mod.rs
//!
//! ## Overview
//!
//! The toolbox proper. Each submodule covers one concern:
//!
//! - **`process`**: running commands with flexible stdin/stdout wiring.
//! - **`system`**: scoped environment and working-directory changes, fatal exit.
//! - **`fs`**: file contents, directories, globbing and path text.
//! - **`git`**: queries against a git working tree.
//! - **`util`**: small numeric and iteration helpers.
//!
//! ```rust
//! use tbx::common::{fs, process, util};
//!
//! # fn main() -> tbx::Result<()> {
//! let out = process::capture("echo hello")?;
//! assert!(util::isnum_str(" 42 "));
//! assert_eq!(fs::paths::basename(out.trim()), "hello");
//! # Ok(())
//! # }
//! ```
//!

/// File and path helpers.
pub mod fs;
/// Git working tree queries.
pub mod git;
/// Command execution with redirection and chaining.
pub mod process;
/// Process-wide state: environment, working directory, exit.
pub mod system;
/// Miscellaneous helpers (`isnum_str`, `randomize`, `revnumerate`, `version`).
pub mod util;
