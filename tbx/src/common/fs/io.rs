//! # Tbx Filesystem I/O Operations
//!
//! File: tbx/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Wrappers around `std::fs` for the toolbox's file chores: reading a file's
//! contents (optionally split into a list), making sure a directory exists,
//! checking existence, and globbing several patterns at once.
//!
//! ## Architecture
//!
//! - **`contents`**: reads a file as a string or a list split on regex
//!   separators, with an optional default for missing files. Permission
//!   failures surface as `TbxError::Unreadable` carrying the path.
//! - **`cmkdir`**: creates a directory and its parents if missing, erroring
//!   if the path exists but is not a directory.
//! - **`exists`**: `Path::exists`.
//! - **`lglob`**: expands several glob patterns into one list, optionally
//!   removing duplicates.
//!
//! ## Usage
//!
//! ```rust
//! use tbx::common::fs::io::{contents, ContentOptions, Contents};
//!
//! # fn main() -> tbx::Result<()> {
//! let dir = std::env::temp_dir().join("tbx-io-doc");
//! tbx::common::fs::io::cmkdir(&dir)?;
//! let file = dir.join("data.txt");
//! std::fs::write(&file, "one\ntwo")?;
//!
//! let lines = contents(&file, &ContentOptions::list())?;
//! assert_eq!(lines, Contents::List(vec!["one".into(), "two".into()]));
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, TbxError};
use anyhow::{anyhow, bail, Context};
use regex_lite::Regex;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// Shape of the value returned by [`contents`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    /// The whole file as one string.
    #[default]
    Str,
    /// The file split on separators.
    List,
}

impl FromStr for ContentFormat {
    type Err = anyhow::Error;

    /// Accepts `"str"` and `"list"`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "str" => Ok(ContentFormat::Str),
            "list" => Ok(ContentFormat::List),
            _ => bail!(TbxError::usage("Invalid format")),
        }
    }
}

/// Options for [`contents`].
#[derive(Debug, Clone, Default)]
pub struct ContentOptions {
    /// Returned when the file does not exist. Ignored when empty.
    pub default: Option<String>,
    pub format: ContentFormat,
    /// Regex separators for `List`. Several are alternated; none means `"\n"`.
    pub separators: Vec<String>,
}

impl ContentOptions {
    /// Whole-file string, no default.
    pub fn string() -> Self {
        Self::default()
    }

    /// Split on newlines, no default.
    pub fn list() -> Self {
        ContentOptions {
            format: ContentFormat::List,
            ..Default::default()
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separators.push(separator.into());
        self
    }
}

/// The value returned by [`contents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contents {
    Str(String),
    List(Vec<String>),
}

impl Contents {
    /// The string form; lists are joined back with newlines.
    pub fn into_string(self) -> String {
        match self {
            Contents::Str(text) => text,
            Contents::List(items) => items.join("\n"),
        }
    }
}

/// Reads the file at `path` as described by `options`.
///
/// # Errors
///
/// - `TbxError::Usage("Non-default separator is only valid for list format")`
///   when separators are given with `ContentFormat::Str`.
/// - `TbxError::Usage` for an invalid separator regex.
/// - `TbxError::Unreadable` when permission is denied.
/// - The underlying I/O error (with the path in context) when the file is
///   missing and no non-empty default was given, or on any other failure.
pub fn contents(path: impl AsRef<Path>, options: &ContentOptions) -> Result<Contents> {
    let path = path.as_ref();
    if options.format == ContentFormat::Str && !options.separators.is_empty() {
        bail!(TbxError::usage(
            "Non-default separator is only valid for list format"
        ));
    }

    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => match options.default.as_deref() {
            Some(default) if !default.is_empty() => {
                debug!("{} not found, using default", path.display());
                default.to_string()
            }
            _ => return Err(read_error(path, err)),
        },
        Err(err) => return Err(read_error(path, err)),
    };

    match options.format {
        ContentFormat::Str => Ok(Contents::Str(data)),
        ContentFormat::List => Ok(Contents::List(split(&data, &options.separators)?)),
    }
}

/// Permission problems become `TbxError::Unreadable`; anything else keeps
/// the I/O error with the path in context.
fn read_error(path: &Path, err: io::Error) -> anyhow::Error {
    if err.kind() == ErrorKind::PermissionDenied {
        anyhow!(TbxError::Unreadable {
            path: path.to_path_buf()
        })
    } else {
        anyhow!(err).context(format!("Failed to read file {}", path.display()))
    }
}

fn split(data: &str, separators: &[String]) -> Result<Vec<String>> {
    let pattern = if separators.is_empty() {
        "\n".to_string()
    } else {
        separators.join("|")
    };
    let regex = Regex::new(&pattern)
        .map_err(|err| TbxError::usage(format!("Invalid separator '{}': {}", pattern, err)))?;
    Ok(regex.split(data).map(str::to_string).collect())
}

/// Ensures a directory exists at `path` and returns it.
///
/// Missing parents are created as well (like `mkdir -p`).
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory
/// (`TbxError::FileSystem`), or if creating it fails.
pub fn cmkdir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        bail!(TbxError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(path.to_path_buf())
}

/// True if `path` exists.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Expands every pattern and returns all matches in one list.
///
/// Unless `dupl_allowed` is set, a path matched by several patterns is only
/// listed once (first occurrence wins).
///
/// # Errors
///
/// Returns `TbxError::Usage` for a malformed pattern, or the I/O error hit
/// while reading a directory during expansion.
pub fn lglob<I, S>(patterns: I, dupl_allowed: bool) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut found = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let paths = glob::glob(pattern)
            .map_err(|err| TbxError::usage(format!("Invalid glob '{}': {}", pattern, err)))?;
        for entry in paths {
            found.push(entry.with_context(|| format!("Failed to expand {}", pattern))?);
        }
    }
    if !dupl_allowed {
        let mut seen = std::collections::HashSet::new();
        found.retain(|path| seen.insert(path.clone()));
    }
    Ok(found)
}
