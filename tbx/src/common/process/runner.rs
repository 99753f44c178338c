//! # Command Runner (`common::process::runner`)
//!
//! File: tbx/src/common/process/runner.rs
//!
//! ## Overview
//!
//! The `Runner` executes one command (or pipeline) with a configurable input
//! source and output sink and returns the captured combined output, or
//! `None` when the output was diverted to a file, descriptor, or buffer.
//!
//! ## Resolution Rules
//!
//! Input:
//! - `Empty` → the child's stdin is closed.
//! - `Text` → written to the child's stdin.
//! - `Reader` → drained to text first, then treated as `Text`.
//! - `Path` → file opened for reading and used as stdin.
//! - `Command` → parsed as a pipeline and prepended to the stages.
//! - `Descriptor` / `Handle` → used directly as stdin.
//!
//! Output:
//! - `Capture` → combined output returned.
//! - `Writer` → combined output captured, then written into the buffer.
//! - `Path` → file created/truncated, combined output written there.
//! - `Command` → parsed as a pipeline and appended to the stages; its
//!   output is captured and returned.
//! - `Descriptor` / `Handle` → combined output written there.
//!
//! The exit status of the child is never turned into an error. `run` drops
//! it, `execute` reports it through `Outcome`.
//!
use super::command::CommandLine;
use super::pipeline::{Outcome, Pipeline, Sink, Source};
use super::redirect::{Input, Output};
use crate::core::error::Result;
use anyhow::Context;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tracing::{debug, info};

/// Executes commands with redirection. Cheap to build; holds no processes.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    current_dir: Option<PathBuf>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs children in `dir` instead of the caller's working directory.
    ///
    /// Relative redirection paths are still resolved against the caller's
    /// working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Runs `command` and returns its combined output, or `None` if the
    /// output was diverted.
    ///
    /// # Errors
    ///
    /// - `TbxError::Usage` for a malformed command line or an output string
    ///   without a `>`/`|` operator.
    /// - `TbxError::Spawn` when a process cannot be started.
    /// - I/O errors (with the path in context) when a redirection file
    ///   cannot be opened.
    pub fn run<'i, 'o, C, I, O>(&self, command: C, input: I, output: O) -> Result<Option<String>>
    where
        C: TryInto<CommandLine>,
        C::Error: Into<anyhow::Error>,
        I: Into<Input<'i>>,
        O: TryInto<Output<'o>>,
        O::Error: Into<anyhow::Error>,
    {
        Ok(self.execute(command, input, output)?.output)
    }

    /// Like [`Runner::run`], but also reports exit statuses.
    pub fn execute<'i, 'o, C, I, O>(&self, command: C, input: I, output: O) -> Result<Outcome>
    where
        C: TryInto<CommandLine>,
        C::Error: Into<anyhow::Error>,
        I: Into<Input<'i>>,
        O: TryInto<Output<'o>>,
        O::Error: Into<anyhow::Error>,
    {
        let command = command.try_into().map_err(Into::<anyhow::Error>::into)?;
        let output = output.try_into().map_err(Into::<anyhow::Error>::into)?;
        self.execute_pipeline(Pipeline::from(command), input.into(), output)
    }

    /// Runs a whole pipeline with the given redirections.
    pub fn execute_pipeline(
        &self,
        pipeline: Pipeline,
        input: Input<'_>,
        output: Output<'_>,
    ) -> Result<Outcome> {
        let (source, leading) = resolve_input(input)?;
        let (sink, trailing) = resolve_output(output)?;

        let mut stages = match leading {
            Some(leading) => leading.then(pipeline),
            None => pipeline,
        };
        if let Some(trailing) = trailing {
            stages = stages.then(trailing);
        }

        debug!("Running pipeline: {}", stages);
        stages.execute(self.current_dir.as_deref(), source, sink)
    }

    /// Runs `command` with no input and returns its output as a string.
    pub fn capture<C>(&self, command: C) -> Result<String>
    where
        C: TryInto<CommandLine>,
        C::Error: Into<anyhow::Error>,
    {
        Ok(self
            .run(command, Input::Empty, Output::Capture)?
            .unwrap_or_default())
    }
}

fn resolve_input(input: Input<'_>) -> Result<(Source, Option<Pipeline>)> {
    let resolved = match input {
        Input::Empty => (Source::Null, None),
        Input::Text(text) => (Source::Text(text), None),
        Input::Reader(reader) => {
            let mut text = String::new();
            reader
                .read_to_string(&mut text)
                .context("Failed to drain input buffer")?;
            (Source::Text(text), None)
        }
        Input::Path(path) => (Source::Stdio(Stdio::from(open_input(&path)?)), None),
        Input::Command(line) => (Source::Null, Some(Pipeline::parse(&line)?)),
        #[cfg(unix)]
        Input::Descriptor(fd) => {
            let owned = fd
                .try_clone_to_owned()
                .context("Failed to duplicate input descriptor")?;
            (Source::Stdio(Stdio::from(owned)), None)
        }
        Input::Handle(file) => (Source::Stdio(Stdio::from(file)), None),
    };
    Ok(resolved)
}

fn resolve_output(output: Output<'_>) -> Result<(Sink<'_>, Option<Pipeline>)> {
    let resolved = match output {
        Output::Capture => (Sink::Capture, None),
        Output::Writer(writer) => (Sink::Writer(writer), None),
        Output::Path(path) => (Sink::File(create_output(&path)?), None),
        Output::Command(line) => (Sink::Capture, Some(Pipeline::parse(&line)?)),
        #[cfg(unix)]
        Output::Descriptor(fd) => {
            let owned = fd
                .try_clone_to_owned()
                .context("Failed to duplicate output descriptor")?;
            (Sink::File(File::from(owned)), None)
        }
        Output::Handle(file) => (Sink::File(file), None),
    };
    Ok(resolved)
}

fn open_input(path: &Path) -> Result<File> {
    debug!("Redirecting stdin from {:?}", path);
    File::open(path).with_context(|| format!("Failed to open input file {}", path.display()))
}

fn create_output(path: &Path) -> Result<File> {
    info!("Redirecting output to {:?}", path);
    File::create(path).with_context(|| format!("Failed to open output file {}", path.display()))
}

/// Runs `command` with the default [`Runner`].
///
/// ```rust
/// use tbx::{run, Input, Output};
///
/// let out = run("echo hello", Input::Empty, Output::Capture).unwrap();
/// assert!(out.unwrap().contains("hello"));
///
/// let out = run("cat", "hello\n", Output::Capture).unwrap();
/// assert_eq!(out.as_deref(), Some("hello\n"));
///
/// let out = run("printf 'a\\nb\\n'", Input::Empty, "| grep a").unwrap().unwrap();
/// assert!(out.contains('a') && !out.contains('b'));
/// ```
pub fn run<'i, 'o, C, I, O>(command: C, input: I, output: O) -> Result<Option<String>>
where
    C: TryInto<CommandLine>,
    C::Error: Into<anyhow::Error>,
    I: Into<Input<'i>>,
    O: TryInto<Output<'o>>,
    O::Error: Into<anyhow::Error>,
{
    Runner::new().run(command, input, output)
}

/// Runs `command` with no input and returns its combined output.
pub fn capture<C>(command: C) -> Result<String>
where
    C: TryInto<CommandLine>,
    C::Error: Into<anyhow::Error>,
{
    Runner::new().capture(command)
}
