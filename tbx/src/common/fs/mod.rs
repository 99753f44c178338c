//! # Tbx Filesystem Utilities (`common::fs`)
//!
//! File: tbx/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the toolbox and its command-line front end.
//!
//! ## Architecture
//!
//! - **`io`**: reading file contents (`contents`), creating directories
//!   (`cmkdir`), existence checks (`exists`) and multi-pattern globbing
//!   (`lglob`).
//! - **`paths`**: string-level path helpers (`abspath`, `basename`,
//!   `dirname`, `expand`).
//!
//! Callers import from the submodule they need, e.g.
//! `use tbx::common::fs::io::cmkdir;`.
//!

/// File reads, directory creation and globbing.
pub mod io;
/// Path text helpers.
pub mod paths;
