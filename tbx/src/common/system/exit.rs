//! # Fatal Exit (`common::system::exit`)
//!
//! File: tbx/src/common/system/exit.rs
//!
//! Terminating the current process with a message, for command-line tools
//! built on the toolbox.
//!
use std::fmt::Display;
use tracing::error;

/// Message used by [`fatal_default`].
pub const DEFAULT_FATAL_MESSAGE: &str = "Fatal error with no reason specified";

/// Prints `msg` to stderr and exits the process with status 1.
pub fn fatal(msg: impl Display) -> ! {
    let msg = msg.to_string();
    error!("fatal: {}", msg);
    eprintln!("{}", msg);
    std::process::exit(1)
}

/// [`fatal`] with [`DEFAULT_FATAL_MESSAGE`].
pub fn fatal_default() -> ! {
    fatal(DEFAULT_FATAL_MESSAGE)
}
