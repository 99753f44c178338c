//! # Tbx System Utilities Module (`common::system`)
//!
//! File: tbx/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Helpers that touch process-wide state: the environment, the working
//! directory, and process termination.
//!
//! ## Architecture
//!
//! - **`env`**: `EnvGuard` / `envset` for temporary environment overrides.
//! - **`dir`**: `DirGuard` / `chdir` for directory excursions.
//! - **`exit`**: `fatal` for exiting with a message.
//!
//! Both guards restore the previous state when dropped, which also covers
//! early returns through `?` and unwinding panics.
//!
//! ```rust
//! use tbx::common::system::{dir::chdir, env::EnvGuard};
//!
//! # fn main() -> tbx::Result<()> {
//! let _env = EnvGuard::set([("TBX_SYSTEM_DOC", Some("1"))])?;
//! let here = chdir(std::env::temp_dir(), || std::env::current_dir())??;
//! assert!(here.is_absolute());
//! # Ok(())
//! # }
//! ```
//!

/// Directory excursions (`DirGuard`, `chdir`).
pub mod dir;
/// Scoped environment variables (`EnvGuard`, `envset`).
pub mod env;
/// Process termination with a message (`fatal`).
pub mod exit;
