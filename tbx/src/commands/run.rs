//! # Tbx Run Command
//!
//! File: tbx/src/commands/run.rs
//!
//! ## Overview
//!
//! Implements `tbx run`: executes a command through the library runner with
//! the same input/output notation the library accepts, and prints whatever
//! the runner returns.
//!
//! ## Architecture
//!
//! 1. Load configuration (`core::config`) for `[env]` overrides and aliases.
//! 2. Resolve the command: a leading `@name` is replaced by the configured
//!    alias; a single word is tokenized as a whole command line; several
//!    words are taken verbatim.
//! 3. Apply the `[env]` table through an `EnvGuard` for the duration of the run.
//! 4. Execute with `--input`/`--output` parsed by `Input::parse`/`Output::parse`.
//! 5. Print the captured output (if any). With `--status`, a failing exit
//!    status becomes an error so the process exits non-zero.
//!
//! ## Usage
//!
//! ```bash
//! tbx run "ls -la"
//! tbx run -i "hello" cat
//! tbx run -i "<notes.txt" -o "| grep TODO" cat
//! tbx run -o ">listing.txt" ls
//! tbx run --status -- false
//! tbx run @today
//! ```
//!
use anyhow::{bail, Context};
use clap::Parser;
use std::path::{Path, PathBuf};
use tbx::common::system::env::EnvGuard;
use tbx::core::config::{self, Config};
use tbx::core::error::{Result, TbxError};
use tbx::{CommandLine, Input, Output, Runner};
use tracing::{debug, info, warn};

/// # Run Arguments (`RunArgs`)
///
/// Defines the command-line arguments accepted by `tbx run`.
#[derive(Parser, Debug)]
#[command(
    about = "Run a command with optional input/output redirection",
    long_about = "Runs a command and prints its combined stdout and stderr.\n\
                  Input: literal text, '<path' to read a file, or 'cmd |' to chain a command.\n\
                  Output: '>path' to write a file or '| cmd' to pipe into a command."
)]
pub struct RunArgs {
    /// Stdin for the command: text, `<path` or `cmd |`.
    #[arg(short, long)]
    input: Option<String>,

    /// Where output goes: `>path` or `| cmd`. Printed when omitted.
    #[arg(short, long)]
    output: Option<String>,

    /// Run the command in this directory.
    #[arg(short = 'C', long)]
    dir: Option<PathBuf>,

    /// Fail when any stage exits with a non-zero status.
    #[arg(long)]
    status: bool,

    /// The command. One argument is tokenized like a shell line; `@name` runs an alias.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

/// # Handle Run Command (`handle_run`)
///
/// Resolves and executes the command described by `args`, printing its
/// output to stdout.
///
/// ## Returns
///
/// * `Err` if configuration is invalid, the alias is unknown, the command
///   cannot be tokenized or spawned, a redirection cannot be opened, or
///   `--status` was given and a stage failed.
pub fn handle_run(args: RunArgs, config_path: Option<&Path>) -> Result<()> {
    info!("Handling run command...");
    debug!("Run args: {:?}", args);

    let cfg = config::load_config(config_path).context("Failed to load tbx configuration")?;
    let command = resolve_command(&args.command, &cfg)?;

    let input = args
        .input
        .as_deref()
        .map(Input::parse)
        .unwrap_or_default();
    let output = match args.output.as_deref() {
        Some(spec) => Output::parse(spec)?,
        None => Output::Capture,
    };

    let mut runner = Runner::new();
    if let Some(dir) = &args.dir {
        runner = runner.current_dir(dir);
    }

    let _env = apply_env(&cfg)?;
    let outcome = runner.execute(command.clone(), input, output)?;
    print_output(outcome.output.as_deref());

    if !outcome.success() {
        warn!("'{}' exited with {}", command, outcome.status);
        if args.status {
            bail!("Command '{}' exited with {}", command, outcome.status);
        }
    }
    Ok(())
}

/// Turns the trailing arguments of `tbx run` into a command line.
fn resolve_command(words: &[String], cfg: &Config) -> Result<CommandLine> {
    let Some((first, rest)) = words.split_first() else {
        bail!(TbxError::usage("No command given"));
    };
    if let Some(name) = first.strip_prefix('@') {
        let line = cfg.aliases.get(name).ok_or_else(|| {
            TbxError::usage(format!("Unknown alias '{}'", name))
        })?;
        debug!("Alias '{}' -> '{}'", name, line);
        return Ok(CommandLine::parse(line)?.with_args(rest));
    }
    if rest.is_empty() {
        CommandLine::parse(first)
    } else {
        CommandLine::from_words(words.iter().cloned())
    }
}

/// Applies the configured `[env]` table until the guard is dropped.
pub(crate) fn apply_env(cfg: &Config) -> Result<EnvGuard> {
    EnvGuard::set(cfg.env.iter().map(|(key, value)| (key, Some(value))))
}

/// Prints captured output exactly as produced.
pub(crate) fn print_output(output: Option<&str>) {
    if let Some(text) = output {
        print!("{}", text);
    }
}
