//! # Tbx Error Types
//!
//! File: tbx/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the toolbox. Domain
//! failures are described by the `TbxError` enum; everything else (plain
//! I/O failures with path context, parse failures, ...) travels as an
//! `anyhow::Error`, which is what the crate-wide `Result<T>` alias carries.
//!
//! ## Architecture
//!
//! - `TbxError`: a `thiserror` enum for the failures callers may want to match on
//! - `Result<T>`: a type alias for `anyhow::Result<T>`
//!
//! The error kinds cover:
//! - Usage errors (bad argument combinations, malformed command lines)
//! - Process spawn failures, naming the command that could not be started
//! - Unreadable files (permission denied), carrying the path
//! - Configuration and filesystem shape errors
//!
//! ## Examples
//!
//! ```rust
//! use tbx::core::error::TbxError;
//! use tbx::Output;
//!
//! let err = Output::parse("foobar").unwrap_err();
//! match err.downcast_ref::<TbxError>() {
//!     Some(TbxError::Usage(msg)) => assert!(msg.contains("required for string output")),
//!     _ => panic!("expected a usage error"),
//! }
//! ```
//!
//! A child process exiting with a non-zero status is *not* an error anywhere
//! in this crate.
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the toolbox.
#[derive(Error, Debug)]
pub enum TbxError {
    /// Invalid argument or argument combination. Never retried.
    #[error("{0}")]
    Usage(String),

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't read file {}", path.display())]
    Unreadable { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),
}

impl TbxError {
    /// Shorthand for building a `TbxError::Usage`.
    pub fn usage(msg: impl Into<String>) -> Self {
        TbxError::Usage(msg.into())
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
