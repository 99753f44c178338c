//! # Tbx Main Entry Point
//!
//! File: tbx/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point of the `tbx` command-line tool. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers in `commands`
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! tbx --help
//!
//! # Run a command with increased verbosity
//! tbx -vv run "git status"
//!
//! # Use a specific configuration file
//! tbx --config ./tbx.toml alias help
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the command handler
//! 4. Report any error on stderr and exit with status 1
//!
use clap::Parser;
use std::path::PathBuf;
use tbx::common::system::exit::fatal;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "tbx",
    about = "tbx: a toolbox of everyday OS chores",
    long_about = "Run commands with redirection, query git, manipulate paths and read files.\n\
                  Configuration: [env] and [aliases] tables in the user config file and .tbx.toml.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// User configuration file (replaces the platform default location).
    #[arg(long, env = "TBX_CONFIG", global = true)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    #[command(alias = "g")]
    Git(commands::git::GitArgs),
    #[command(alias = "p")]
    Path(commands::path::PathArgs),
    #[command(alias = "c")]
    Contents(commands::contents::ContentsArgs),
    #[command(alias = "a")]
    Alias(commands::alias::AliasArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config = cli.config.as_deref();
    let command_result = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args, config),
        Commands::Git(args) => commands::git::handle_git(args),
        Commands::Path(args) => commands::path::handle_path(args),
        Commands::Contents(args) => commands::contents::handle_contents(args),
        Commands::Alias(args) => commands::alias::handle_alias(args, config),
    };

    if let Err(e) = command_result {
        tracing::debug!("Command execution failed: {:?}", e);
        fatal(format!("Error: {:#}", e));
    }
}
