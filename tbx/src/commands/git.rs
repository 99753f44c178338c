//! # Tbx Git Command Group
//!
//! File: tbx/src/commands/git.rs
//!
//! ## Overview
//!
//! Implements `tbx git <tag|hash|branch|status>`, printing the answers of
//! `common::git::GitRepo` for the current directory (or `-C <dir>`).
//!
//! ## Usage
//!
//! ```bash
//! tbx git tag
//! tbx git hash HEAD~1
//! tbx git -C ../other branch
//! tbx git status
//! ```
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tbx::common::git::{GitRepo, GitStatus};
use tbx::core::error::Result;
use tracing::{debug, info};

/// # Git Arguments (`GitArgs`)
#[derive(Parser, Debug)]
#[command(about = "Query the git repository in the current directory")]
pub struct GitArgs {
    /// Query the repository containing this directory instead.
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: GitCommand,
}

#[derive(Subcommand, Debug)]
enum GitCommand {
    /// Print the most recent tag.
    Tag,
    /// Print the commit hash of REF (default HEAD).
    Hash {
        reference: Option<String>,
    },
    /// Print the current branch name.
    Branch,
    /// List staged, unstaged and untracked files.
    Status,
}

/// # Handle Git Command (`handle_git`)
///
/// Routes to the `GitRepo` query for the chosen subcommand and prints it.
pub fn handle_git(args: GitArgs) -> Result<()> {
    info!("Handling git command...");
    debug!("Git args: {:?}", args);

    let repo = match &args.dir {
        Some(dir) => GitRepo::at(dir),
        None => GitRepo::current(),
    };
    match args.command {
        GitCommand::Tag => println!("{}", repo.last_tag()?),
        GitCommand::Hash { reference } => println!("{}", repo.hash(reference.as_deref())?),
        GitCommand::Branch => println!("{}", repo.current_branch()?),
        GitCommand::Status => print!("{}", format_status(&repo.status()?)),
    }
    Ok(())
}

fn format_status(status: &GitStatus) -> String {
    let mut out = String::new();
    for (label, files) in [
        ("staged", &status.staged),
        ("unstaged", &status.unstaged),
        ("untracked", &status.untracked),
    ] {
        for file in files {
            out.push_str(&format!("{}: {}\n", label, file));
        }
    }
    out
}
