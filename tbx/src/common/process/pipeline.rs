//! # Pipelines (`common::process::pipeline`)
//!
//! File: tbx/src/common/process/pipeline.rs
//!
//! ## Overview
//!
//! A `Pipeline` is an ordered list of command lines connected by OS pipes:
//! the combined stdout/stderr of each stage becomes the stdin of the next.
//! A single command is simply a one-stage pipeline, so chained input
//! (`"cmd |"`) and chained output (`"| cmd"`) reuse the same spawn and wait
//! logic as a plain `run`.
//!
//! ## Architecture
//!
//! 1. Every stage but the last is spawned with a fresh `std::io::pipe()` as
//!    both stdout and stderr; the read end becomes the next stage's stdin.
//! 2. The last stage is wired to the resolved sink (capture pipe or file).
//! 3. Each `std::process::Command` is dropped right after spawning so the
//!    parent holds no copy of any write end and readers see EOF.
//! 4. Literal stdin text is written from a scoped thread while the calling
//!    thread drains the captured output.
//! 5. All stages are waited on; if a later stage fails to spawn, the stages
//!    already running are killed and reaped before the error is returned.
//!
use super::command::{split_unquoted_pipes, CommandLine};
use super::redirect::{Input, Output};
use super::runner::Runner;
use crate::core::error::{Result, TbxError};
use anyhow::{anyhow, Context};
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Child, ExitStatus, Stdio};
use std::thread;
use tracing::{debug, warn};

/// An ordered, non-empty list of stages joined by pipes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<CommandLine>,
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Captured text, or `None` when the output was diverted.
    pub output: Option<String>,
    /// Exit status of the last stage.
    pub status: ExitStatus,
    /// Exit status of every stage, in pipeline order.
    pub statuses: Vec<ExitStatus>,
}

impl Outcome {
    /// True when every stage exited successfully.
    pub fn success(&self) -> bool {
        self.statuses.iter().all(ExitStatus::success)
    }
}

/// Resolved stdin of the first stage.
pub(crate) enum Source {
    Null,
    Text(String),
    Stdio(Stdio),
}

/// Resolved destination of the last stage.
pub(crate) enum Sink<'a> {
    Capture,
    Writer(&'a mut dyn Write),
    File(File),
}

impl Pipeline {
    /// Parses `line`, splitting stages on unquoted `|`.
    ///
    /// # Errors
    ///
    /// Returns `TbxError::Usage` if any stage is empty or malformed.
    pub fn parse(line: &str) -> Result<Self> {
        let stages = split_unquoted_pipes(line)
            .into_iter()
            .map(CommandLine::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Pipeline { stages })
    }

    /// Builds a pipeline from explicit stages.
    ///
    /// # Errors
    ///
    /// Returns `TbxError::Usage` if `stages` is empty.
    pub fn from_stages(stages: Vec<CommandLine>) -> Result<Self> {
        if stages.is_empty() {
            return Err(anyhow!(TbxError::usage("Pipeline has no stages")));
        }
        Ok(Pipeline { stages })
    }

    /// Appends the stages of `next` after this pipeline's last stage.
    pub fn then(mut self, next: Pipeline) -> Self {
        self.stages.extend(next.stages);
        self
    }

    pub fn stages(&self) -> &[CommandLine] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the pipeline in the current directory with the given
    /// redirections. Same rules and result as [`super::run`].
    pub fn run<'i, 'o, I, O>(self, input: I, output: O) -> Result<Option<String>>
    where
        I: Into<Input<'i>>,
        O: TryInto<Output<'o>>,
        O::Error: Into<anyhow::Error>,
    {
        let output = output.try_into().map_err(Into::<anyhow::Error>::into)?;
        Ok(Runner::new()
            .execute_pipeline(self, input.into(), output)?
            .output)
    }

    /// Spawns every stage, feeds `source`, delivers to `sink` and waits.
    pub(crate) fn execute(&self, dir: Option<&Path>, source: Source, sink: Sink<'_>) -> Result<Outcome> {
        let (stdin, stdin_text) = match source {
            Source::Null => (Stdio::null(), None),
            Source::Text(text) => (Stdio::piped(), Some(text)),
            Source::Stdio(stdio) => (stdio, None),
        };

        let (last_streams, capture, writer) = match sink {
            Sink::Capture => {
                let (reader, streams) = combined_pipe()?;
                (streams, Some(reader), None)
            }
            Sink::Writer(writer) => {
                let (reader, streams) = combined_pipe()?;
                (streams, Some(reader), Some(writer))
            }
            Sink::File(file) => {
                let stdout = file.try_clone().context("Failed to duplicate output file")?;
                ((Stdio::from(stdout), Stdio::from(file)), None, None)
            }
        };

        let mut children = Vec::with_capacity(self.stages.len());
        if let Err(err) = self.spawn_all(dir, stdin, last_streams, &mut children) {
            reap(&mut children);
            return Err(err);
        }

        let feed = stdin_text.and_then(|text| {
            children
                .first_mut()
                .and_then(|child| child.stdin.take())
                .map(|pipe| (text, pipe))
        });

        let captured = match transfer(feed, capture) {
            Ok(captured) => captured,
            Err(err) => {
                reap(&mut children);
                return Err(err.context("Failed to transfer data to or from the child process"));
            }
        };

        let statuses = wait_all(&self.stages, &mut children)?;
        let status = match statuses.last() {
            Some(status) => *status,
            None => return Err(anyhow!(TbxError::usage("Pipeline has no stages"))),
        };

        let text = captured.map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
        let output = match (text, writer) {
            (Some(text), Some(writer)) => {
                writer
                    .write_all(text.as_bytes())
                    .and_then(|()| writer.flush())
                    .context("Failed to write captured output to buffer")?;
                None
            }
            (text, _) => text,
        };

        Ok(Outcome {
            output,
            status,
            statuses,
        })
    }

    fn spawn_all(
        &self,
        dir: Option<&Path>,
        mut stdin: Stdio,
        last_streams: (Stdio, Stdio),
        children: &mut Vec<Child>,
    ) -> Result<()> {
        let Some((last, init)) = self.stages.split_last() else {
            return Err(anyhow!(TbxError::usage("Pipeline has no stages")));
        };
        for stage in init {
            let (reader, streams) = combined_pipe()?;
            children.push(spawn_stage(stage, dir, stdin, streams)?);
            stdin = Stdio::from(reader);
        }
        children.push(spawn_stage(last, dir, stdin, last_streams)?);
        Ok(())
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, stage) in self.stages.iter().enumerate() {
            if idx > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", stage)?;
        }
        Ok(())
    }
}

impl From<CommandLine> for Pipeline {
    fn from(value: CommandLine) -> Self {
        Pipeline {
            stages: vec![value],
        }
    }
}

/// A pipe whose write end serves as both stdout and stderr.
fn combined_pipe() -> Result<(io::PipeReader, (Stdio, Stdio))> {
    let (reader, writer) = io::pipe().context("Failed to create pipe")?;
    let stdout = writer.try_clone().context("Failed to duplicate pipe")?;
    Ok((reader, (Stdio::from(stdout), Stdio::from(writer))))
}

fn spawn_stage(
    stage: &CommandLine,
    dir: Option<&Path>,
    stdin: Stdio,
    (stdout, stderr): (Stdio, Stdio),
) -> Result<Child> {
    let mut command = stage.to_command();
    command.stdin(stdin).stdout(stdout).stderr(stderr);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }
    debug!("Spawning '{}'", stage);
    command.spawn().map_err(|source| {
        anyhow!(TbxError::Spawn {
            command: stage.to_string(),
            source,
        })
    })
}

/// Writes stdin text on a scoped thread while draining the capture pipe.
fn transfer(
    feed: Option<(String, std::process::ChildStdin)>,
    capture: Option<io::PipeReader>,
) -> Result<Option<Vec<u8>>> {
    thread::scope(|scope| {
        let writer = feed.map(|(text, mut pipe)| {
            scope.spawn(move || pipe.write_all(text.as_bytes()))
        });

        let captured = match capture {
            Some(mut reader) => {
                let mut buf = Vec::new();
                reader
                    .read_to_end(&mut buf)
                    .context("Failed to read child output")?;
                Some(buf)
            }
            None => None,
        };

        if let Some(handle) = writer {
            match handle.join() {
                Ok(Ok(())) => {}
                // The child is free to exit without reading all of its input.
                Ok(Err(err)) if err.kind() == io::ErrorKind::BrokenPipe => {
                    debug!("Child closed stdin early: {}", err);
                }
                Ok(Err(err)) => return Err(anyhow!(err).context("Failed to write child input")),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
        Ok(captured)
    })
}

/// Waits on every stage, even after one wait fails, and reports the first
/// failure.
fn wait_all(stages: &[CommandLine], children: &mut [Child]) -> Result<Vec<ExitStatus>> {
    let mut statuses = Vec::with_capacity(children.len());
    let mut first_err = None;
    for (stage, child) in stages.iter().zip(children.iter_mut()) {
        match child.wait() {
            Ok(status) => {
                debug!("'{}' exited with {}", stage, status);
                statuses.push(status);
            }
            Err(err) => {
                warn!("Failed to wait for '{}': {}", stage, err);
                if first_err.is_none() {
                    let context = format!("Failed to wait for '{}'", stage);
                    first_err = Some(anyhow!(err).context(context));
                }
            }
        }
    }
    match first_err {
        Some(err) => Err(err),
        None => Ok(statuses),
    }
}

fn reap(children: &mut [Child]) {
    for child in children.iter_mut() {
        if let Err(err) = child.kill() {
            warn!("Failed to kill child {}: {}", child.id(), err);
        }
        let _ = child.wait();
    }
}
