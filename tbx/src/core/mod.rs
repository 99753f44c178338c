//! # Tbx Core Infrastructure
//!
//! File: tbx/src/core/mod.rs
//!
//! ## Overview
//!
//! Infrastructure shared by the library helpers and the `tbx` binary:
//! - `config`: configuration loading, merging and validation
//! - `dispatch`: a small subcommand registry for simple tools
//! - `error`: error types and the crate-wide `Result` alias
//!
//! ```rust
//! use tbx::core::dispatch::Dispatcher;
//! use tbx::core::error::{Result, TbxError};
//! ```
//!
pub mod config;
pub mod dispatch;
pub mod error;
