//! # Subcommand Dispatch (`core::dispatch`)
//!
//! File: tbx/src/core/dispatch.rs
//!
//! ## Overview
//!
//! A minimal registry for small command-line tools that want
//! `prog <subcommand> [args...]` without declaring a full `clap` parser.
//! Handlers are registered by name with a one-line summary; `dispatch`
//! looks up `args[0]` and passes the remaining arguments through.
//!
//! The name `help` is built in: it prints the listing produced by `usage`.
//! A missing or unknown subcommand is a `TbxError::Usage` carrying the same
//! listing, so callers can print it and exit.
//!
//! ## Usage
//!
//! ```rust
//! use tbx::core::dispatch::Dispatcher;
//!
//! # fn main() -> tbx::Result<()> {
//! let mut tool = Dispatcher::new("mytool");
//! tool.register("greet", "say hello", |args| {
//!     println!("hello {}", args.join(" "));
//!     Ok(())
//! });
//!
//! tool.dispatch(&["greet".to_string(), "world".to_string()])?;
//! assert!(tool.dispatch(&["nosuch".to_string()]).is_err());
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{Result, TbxError};
use anyhow::bail;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

type Handler<'a> = Box<dyn Fn(&[String]) -> Result<()> + 'a>;

struct Entry<'a> {
    summary: String,
    handler: Handler<'a>,
}

/// Maps subcommand names to handlers.
pub struct Dispatcher<'a> {
    program: String,
    entries: BTreeMap<String, Entry<'a>>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(program: impl Into<String>) -> Self {
        Dispatcher {
            program: program.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Adds (or replaces) the handler for `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, summary: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&[String]) -> Result<()> + 'a,
    {
        self.entries.insert(
            name.into(),
            Entry {
                summary: summary.into(),
                handler: Box::new(handler),
            },
        );
        self
    }

    /// Registered names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Runs the handler named by `args[0]` with the rest of `args`.
    ///
    /// # Errors
    ///
    /// `TbxError::Usage` (with the usage listing) when `args` is empty or
    /// names no registered subcommand; otherwise whatever the handler returns.
    pub fn dispatch(&self, args: &[String]) -> Result<()> {
        let Some((name, rest)) = args.split_first() else {
            bail!(TbxError::usage(format!(
                "{}: subcommand required\n\n{}",
                self.program,
                self.usage()
            )));
        };

        if let Some(entry) = self.entries.get(name) {
            debug!("dispatch: {} {:?}", name, rest);
            return (entry.handler)(rest);
        }
        if name == "help" {
            println!("{}", self.usage());
            return Ok(());
        }
        bail!(TbxError::usage(format!(
            "{}: unknown subcommand '{}'\n\n{}",
            self.program,
            name,
            self.usage()
        )))
    }

    /// The listing printed by `help`: one line per subcommand.
    pub fn usage(&self) -> String {
        let width = self
            .entries
            .keys()
            .map(String::len)
            .chain(["help".len()])
            .max()
            .unwrap_or_default();
        let mut lines = vec![format!("Usage: {} <subcommand> [args...]", self.program), String::new()];
        lines.push("Subcommands:".to_string());
        for (name, entry) in &self.entries {
            lines.push(format!("  {:<width$}  {}", name, entry.summary, width = width));
        }
        if !self.entries.contains_key("help") {
            lines.push(format!("  {:<width$}  {}", "help", "show this listing", width = width));
        }
        lines.join("\n")
    }
}

impl fmt::Debug for Dispatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("program", &self.program)
            .field("entries", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
