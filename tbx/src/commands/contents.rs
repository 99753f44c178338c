//! # Tbx Contents Command
//!
//! File: tbx/src/commands/contents.rs
//!
//! ## Overview
//!
//! Implements `tbx contents`: prints a file through
//! `common::fs::io::contents`. In list format each item is printed on its
//! own line, which makes `--sep` a quick way to split a file on a regex.
//!
//! ## Usage
//!
//! ```bash
//! tbx contents notes.txt
//! tbx contents --default "none yet" maybe-missing.txt
//! tbx contents --format list --sep ',' --sep ';' values.csv
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tbx::common::fs::io::{contents, ContentFormat, ContentOptions, Contents};
use tbx::core::error::Result;
use tracing::{debug, info};

/// # Contents Arguments (`ContentsArgs`)
#[derive(Parser, Debug)]
#[command(about = "Print a file, optionally split into a list")]
pub struct ContentsArgs {
    /// The file to read.
    path: PathBuf,

    /// `str` (whole file) or `list` (split on separators).
    #[arg(short, long, default_value = "str")]
    format: String,

    /// Regex separator for list format; repeat to alternate several.
    #[arg(short, long = "sep")]
    separators: Vec<String>,

    /// Printed instead when the file does not exist.
    #[arg(short, long)]
    default: Option<String>,
}

/// # Handle Contents Command (`handle_contents`)
pub fn handle_contents(args: ContentsArgs) -> Result<()> {
    info!("Handling contents command...");
    debug!("Contents args: {:?}", args);

    let options = ContentOptions {
        default: args.default,
        format: args.format.parse::<ContentFormat>()?,
        separators: args.separators,
    };
    match contents(&args.path, &options)? {
        Contents::Str(text) => print!("{}", text),
        Contents::List(items) => {
            for item in items {
                println!("{}", item);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contents_args_parsing() {
        let args = ContentsArgs::try_parse_from([
            "contents", "-f", "list", "--sep", ",", "--sep", ";", "data.csv",
        ])
        .unwrap();
        assert_eq!(args.format, "list");
        assert_eq!(args.separators, [",", ";"]);
        assert_eq!(args.path, PathBuf::from("data.csv"));
        assert!(args.default.is_none());
    }
}
