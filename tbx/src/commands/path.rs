//! # Tbx Path Command Group
//!
//! File: tbx/src/commands/path.rs
//!
//! ## Overview
//!
//! Implements `tbx path <subcommand>`, a thin front end over
//! `common::fs::paths` and the directory/glob helpers in `common::fs::io`.
//!
//! ## Usage
//!
//! ```bash
//! tbx path abs ./src
//! tbx path base -n 2 /a/b/c/d       # c/d
//! tbx path dir -n 2 /a/b/c/d        # /a/b
//! tbx path expand '~/$PROJECT'
//! tbx path glob '*.rs' 'src/*.rs'
//! tbx path mkdir build/out
//! tbx path exists Cargo.toml
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tbx::common::fs::{io, paths};
use tbx::core::error::Result;
use tracing::{debug, info};

/// # Path Arguments (`PathArgs`)
#[derive(Parser, Debug)]
#[command(about = "Path helpers: abs, base, dir, expand, glob, mkdir, exists")]
pub struct PathArgs {
    #[command(subcommand)]
    command: PathCommand,
}

#[derive(Subcommand, Debug)]
enum PathCommand {
    /// Absolute form of PATH, resolved lexically.
    Abs { path: PathBuf },
    /// The last N components of PATH.
    Base {
        path: String,
        #[arg(short = 'n', long, default_value_t = 1)]
        segments: usize,
    },
    /// PATH with N trailing components removed.
    Dir {
        path: String,
        #[arg(short = 'n', long, default_value_t = 1)]
        segments: usize,
    },
    /// Expand $VARS and ~ in PATH.
    Expand { path: String },
    /// List the files matching any PATTERN.
    Glob {
        #[arg(required = true)]
        patterns: Vec<String>,
        /// Keep paths matched by more than one pattern.
        #[arg(long)]
        duplicates: bool,
    },
    /// Create DIR (and parents) if missing.
    Mkdir { path: PathBuf },
    /// Print true or false.
    Exists { path: PathBuf },
}

/// # Handle Path Command (`handle_path`)
pub fn handle_path(args: PathArgs) -> Result<()> {
    info!("Handling path command...");
    debug!("Path args: {:?}", args);

    match args.command {
        PathCommand::Abs { path } => println!("{}", paths::abspath(path)?.display()),
        PathCommand::Base { path, segments } => {
            println!("{}", paths::basename_segments(&path, segments))
        }
        PathCommand::Dir { path, segments } => {
            println!("{}", paths::dirname_segments(&path, segments))
        }
        PathCommand::Expand { path } => println!("{}", paths::expand(&path)),
        PathCommand::Glob {
            patterns,
            duplicates,
        } => {
            for found in io::lglob(&patterns, duplicates)? {
                println!("{}", found.display());
            }
        }
        PathCommand::Mkdir { path } => println!("{}", io::cmkdir(path)?.display()),
        PathCommand::Exists { path } => println!("{}", io::exists(path)),
    }
    Ok(())
}
