//! # Redirection Specifiers (`common::process::redirect`)
//!
//! File: tbx/src/common/process/redirect.rs
//!
//! ## Overview
//!
//! `Input` and `Output` describe where a child's standard input comes from
//! and where its combined standard output/standard error goes. Each kind of
//! source or sink is its own variant; the runner resolves them with an
//! exhaustive `match`.
//!
//! ## String Forms
//!
//! Both enums can be built from the short string notation:
//!
//! | String            | Input                       | Output                          |
//! |-------------------|-----------------------------|---------------------------------|
//! | `"< path"`        | read stdin from `path`      | -                               |
//! | `"cmd |"`         | stdin is `cmd`'s output     | -                               |
//! | `"> path"`        | -                           | write output to `path`          |
//! | `"| cmd"`         | -                           | pipe output into `cmd`          |
//! | anything else     | literal stdin text          | usage error                     |
//!
//! Leading and trailing whitespace is ignored when recognising the operators.
//!
use crate::core::error::{Result, TbxError};
use anyhow::bail;
use std::fmt;
use std::fs::File;
use std::io::{Read, Write};
#[cfg(unix)]
use std::os::fd::BorrowedFd;
use std::path::PathBuf;

/// Where a child's standard input comes from.
#[derive(Default)]
pub enum Input<'a> {
    /// No input; the child sees an immediately closed stdin.
    #[default]
    Empty,
    /// Literal text written to the child's stdin.
    Text(String),
    /// An in-memory buffer, drained to text before the child starts.
    Reader(&'a mut dyn Read),
    /// A file opened for reading.
    Path(PathBuf),
    /// A command line run first; its combined output becomes the input.
    Command(String),
    /// An already open descriptor owned by the caller. It is duplicated, so
    /// the caller's descriptor stays open.
    #[cfg(unix)]
    Descriptor(BorrowedFd<'a>),
    /// An open readable file handle, consumed by the call.
    Handle(File),
}

impl<'a> Input<'a> {
    /// Interprets the string notation (see the module docs).
    pub fn parse(spec: &str) -> Input<'static> {
        let trimmed = spec.trim();
        if let Some(path) = trimmed.strip_prefix('<') {
            Input::Path(PathBuf::from(path.trim()))
        } else if let Some(command) = trimmed.strip_suffix('|') {
            Input::Command(command.trim().to_string())
        } else {
            Input::Text(spec.to_string())
        }
    }

    /// Literal text, never interpreted as `<` or `|` notation.
    pub fn text(text: impl Into<String>) -> Input<'static> {
        Input::Text(text.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Input<'static> {
        Input::Path(path.into())
    }

    pub fn command(line: impl Into<String>) -> Input<'static> {
        Input::Command(line.into())
    }

    pub fn reader<R: Read>(reader: &'a mut R) -> Input<'a> {
        Input::Reader(reader)
    }
}

impl From<&str> for Input<'static> {
    /// Uses the string notation; see [`Input::parse`].
    fn from(value: &str) -> Self {
        Input::parse(value)
    }
}

impl From<&String> for Input<'static> {
    fn from(value: &String) -> Self {
        Input::parse(value)
    }
}

impl From<String> for Input<'static> {
    fn from(value: String) -> Self {
        Input::parse(&value)
    }
}

impl From<File> for Input<'static> {
    fn from(value: File) -> Self {
        Input::Handle(value)
    }
}

#[cfg(unix)]
impl<'a> From<BorrowedFd<'a>> for Input<'a> {
    fn from(value: BorrowedFd<'a>) -> Self {
        Input::Descriptor(value)
    }
}

impl fmt::Debug for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Empty => f.write_str("Empty"),
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Reader(_) => f.write_str("Reader(..)"),
            Input::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Input::Command(line) => f.debug_tuple("Command").field(line).finish(),
            #[cfg(unix)]
            Input::Descriptor(fd) => f.debug_tuple("Descriptor").field(fd).finish(),
            Input::Handle(file) => f.debug_tuple("Handle").field(file).finish(),
        }
    }
}

/// Where a child's combined standard output and standard error go.
#[derive(Default)]
pub enum Output<'a> {
    /// Captured and returned to the caller.
    #[default]
    Capture,
    /// Captured, then written into this buffer; nothing is returned.
    Writer(&'a mut dyn Write),
    /// A file created (or truncated) for writing; nothing is returned.
    Path(PathBuf),
    /// A downstream command line fed with the output; its result is returned.
    Command(String),
    /// An already open descriptor owned by the caller; nothing is returned.
    #[cfg(unix)]
    Descriptor(BorrowedFd<'a>),
    /// An open writable file handle, consumed by the call; nothing is returned.
    Handle(File),
}

impl<'a> Output<'a> {
    /// Interprets the string notation (see the module docs).
    ///
    /// # Errors
    ///
    /// Returns `TbxError::Usage` unless the trimmed string starts with `>` or `|`.
    pub fn parse(spec: &str) -> Result<Output<'static>> {
        let trimmed = spec.trim();
        if let Some(path) = trimmed.strip_prefix('>') {
            Ok(Output::Path(PathBuf::from(path.trim())))
        } else if let Some(command) = trimmed.strip_prefix('|') {
            Ok(Output::Command(command.trim().to_string()))
        } else {
            bail!(TbxError::usage("| or > required for string output"))
        }
    }

    pub fn path(path: impl Into<PathBuf>) -> Output<'static> {
        Output::Path(path.into())
    }

    pub fn command(line: impl Into<String>) -> Output<'static> {
        Output::Command(line.into())
    }

    pub fn writer<W: Write>(writer: &'a mut W) -> Output<'a> {
        Output::Writer(writer)
    }

    /// True when the result of the call is returned rather than diverted.
    pub fn is_returned(&self) -> bool {
        matches!(self, Output::Capture | Output::Command(_))
    }
}

impl TryFrom<&str> for Output<'static> {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        Output::parse(value)
    }
}

impl TryFrom<&String> for Output<'static> {
    type Error = anyhow::Error;

    fn try_from(value: &String) -> Result<Self> {
        Output::parse(value)
    }
}

impl TryFrom<String> for Output<'static> {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Output::parse(&value)
    }
}

impl From<File> for Output<'static> {
    fn from(value: File) -> Self {
        Output::Handle(value)
    }
}

#[cfg(unix)]
impl<'a> From<BorrowedFd<'a>> for Output<'a> {
    fn from(value: BorrowedFd<'a>) -> Self {
        Output::Descriptor(value)
    }
}

impl fmt::Debug for Output<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Capture => f.write_str("Capture"),
            Output::Writer(_) => f.write_str("Writer(..)"),
            Output::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Output::Command(line) => f.debug_tuple("Command").field(line).finish(),
            #[cfg(unix)]
            Output::Descriptor(fd) => f.debug_tuple("Descriptor").field(fd).finish(),
            Output::Handle(file) => f.debug_tuple("Handle").field(file).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_parse_path() {
        match Input::parse("  < /tmp/script  ") {
            Input::Path(path) => assert_eq!(path, PathBuf::from("/tmp/script")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_input_parse_command() {
        match Input::parse("echo 'import this' |") {
            Input::Command(line) => assert_eq!(line, "echo 'import this'"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_input_parse_literal_keeps_whitespace() {
        match Input::from("hello\n") {
            Input::Text(text) => assert_eq!(text, "hello\n"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_input_leading_redirect_wins_over_trailing_pipe() {
        assert!(matches!(Input::parse("<odd|"), Input::Path(p) if p == PathBuf::from("odd|")));
    }

    #[test]
    fn test_output_parse() {
        assert!(matches!(
            Output::parse(">  /tmp/out.txt").unwrap(),
            Output::Path(p) if p == PathBuf::from("/tmp/out.txt")
        ));
        assert!(matches!(
            Output::parse(" | grep a").unwrap(),
            Output::Command(c) if c == "grep a"
        ));
    }

    #[test]
    fn test_output_parse_requires_operator() {
        let err = Output::parse("foobar").unwrap_err();
        assert!(err.to_string().contains("required for string output"));
        assert!(matches!(
            err.downcast_ref::<TbxError>(),
            Some(TbxError::Usage(_))
        ));
    }

    #[test]
    fn test_output_is_returned() {
        let mut buf = Vec::new();
        assert!(Output::Capture.is_returned());
        assert!(Output::command("wc -l").is_returned());
        assert!(!Output::writer(&mut buf).is_returned());
        assert!(!Output::path("/dev/null").is_returned());
    }
}
