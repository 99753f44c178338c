//! # Command Lines (`common::process::command`)
//!
//! File: tbx/src/common/process/command.rs
//!
//! Tokenization of free-text command lines into argument vectors using POSIX
//! shell word-splitting rules (via `shell-words`), plus the splitting of
//! chained command text on unquoted `|` separators.
//!
use crate::core::error::{Result, TbxError};
use anyhow::bail;
use std::fmt;
use std::process::Command;
use std::str::FromStr;

/// A tokenized command: the program name followed by its arguments.
///
/// Always holds at least one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    words: Vec<String>,
}

impl CommandLine {
    /// Tokenizes `line` with POSIX shell quoting rules.
    ///
    /// # Errors
    ///
    /// Returns `TbxError::Usage` for unbalanced quotes or a trailing escape,
    /// and when the line holds no words at all.
    pub fn parse(line: &str) -> Result<Self> {
        let words = shell_words::split(line).map_err(|err| {
            TbxError::usage(format!("Malformed command line '{}': {}", line, err))
        })?;
        Self::from_words(words)
    }

    /// Builds a command line from already tokenized words.
    ///
    /// # Errors
    ///
    /// Returns `TbxError::Usage` if `words` is empty.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            bail!(TbxError::usage("Command line is empty"));
        }
        Ok(CommandLine { words })
    }

    pub fn program(&self) -> &str {
        &self.words[0]
    }

    pub fn args(&self) -> &[String] {
        &self.words[1..]
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns a copy with `extra` appended as additional arguments.
    pub fn with_args<I, S>(&self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = self.words.clone();
        words.extend(extra.into_iter().map(Into::into));
        CommandLine { words }
    }

    pub(crate) fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args());
        command
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&shell_words::join(&self.words))
    }
}

impl FromStr for CommandLine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        CommandLine::parse(s)
    }
}

impl TryFrom<&str> for CommandLine {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        CommandLine::parse(value)
    }
}

impl TryFrom<&String> for CommandLine {
    type Error = anyhow::Error;

    fn try_from(value: &String) -> Result<Self> {
        CommandLine::parse(value)
    }
}

impl TryFrom<String> for CommandLine {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        CommandLine::parse(&value)
    }
}

impl TryFrom<Vec<String>> for CommandLine {
    type Error = anyhow::Error;

    fn try_from(value: Vec<String>) -> Result<Self> {
        CommandLine::from_words(value)
    }
}

impl TryFrom<&[&str]> for CommandLine {
    type Error = anyhow::Error;

    fn try_from(value: &[&str]) -> Result<Self> {
        CommandLine::from_words(value.iter().copied())
    }
}

/// Splits `line` on every `|` that is not quoted or backslash-escaped.
///
/// Quoting is left in place in the returned pieces; each piece is tokenized
/// later by `CommandLine::parse`.
pub(crate) fn split_unquoted_pipes(line: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_single = false;
    let mut in_double = false;
    let mut escaped = false;

    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if !in_single => escaped = true,
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '|' if !in_single && !in_double => {
                pieces.push(&line[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    pieces.push(&line[start..]);
    pieces
}
