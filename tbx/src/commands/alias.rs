//! # Tbx Alias Command
//!
//! File: tbx/src/commands/alias.rs
//!
//! ## Overview
//!
//! Implements `tbx alias <name> [args...]`: runs a command line defined in
//! the `[aliases]` table of the configuration. Each alias is registered with
//! a `core::dispatch::Dispatcher`, so `tbx alias help` lists them and an
//! unknown name reports the listing.
//!
//! Extra arguments are appended to the alias's command line. The `[env]`
//! table is applied while the alias runs, exactly as for `tbx run`.
//!
//! ## Usage
//!
//! ```bash
//! tbx alias help
//! tbx alias today
//! tbx alias tags --sort=-creatordate
//! ```
//!
use super::run::{apply_env, print_output};
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tbx::core::config::{self, Config};
use tbx::core::dispatch::Dispatcher;
use tbx::core::error::Result;
use tbx::{run, CommandLine, Input, Output};
use tracing::{debug, info};

/// # Alias Arguments (`AliasArgs`)
#[derive(Parser, Debug)]
#[command(about = "Run a command alias from the configuration ('help' lists them)")]
pub struct AliasArgs {
    /// Alias name followed by extra arguments for it.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// # Handle Alias Command (`handle_alias`)
///
/// Loads the configuration and dispatches `args` through the alias table.
pub fn handle_alias(args: AliasArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling alias command...");
    debug!("Alias args: {:?}", args);

    let cfg = config::load_config(config_path).context("Failed to load tbx configuration")?;
    let result = alias_dispatcher(&cfg).dispatch(&args.args);
    result
}

/// Registers one handler per configured alias.
fn alias_dispatcher(cfg: &Config) -> Dispatcher<'_> {
    let mut dispatcher = Dispatcher::new("tbx alias");
    for (name, line) in &cfg.aliases {
        dispatcher.register(name.as_str(), line.as_str(), move |extra: &[String]| {
            let command = CommandLine::parse(line)?.with_args(extra);
            debug!("Alias '{}' -> '{}'", name, command);
            let _env = apply_env(cfg)?;
            print_output(run(command, Input::Empty, Output::Capture)?.as_deref());
            Ok(())
        });
    }
    dispatcher
}
