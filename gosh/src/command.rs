//! Command trait and per-invocation context.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::Result;

use crate::core::history::History;

/// Outcome of a command that did not fail unexpectedly.
///
/// Unexpected failures are the `Err` side of [`Command::execute`]; the shell
/// reports them as `Error executing <name>: <detail>` and keeps looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Keep reading lines.
    Continue,
    /// Stop the REPL.
    Exit,
}

/// Everything a command sees for one invocation.
///
/// Built fresh by the shell for every line it dispatches. The streams are
/// trait objects so tests can swap in in-memory buffers.
pub struct Context<'a> {
    /// Arguments after the command name.
    pub args: &'a [String],
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    /// Session history, shared with the shell.
    pub history: &'a mut History,
}

impl<'a> Context<'a> {
    pub fn new(
        args: &'a [String],
        input: &'a mut dyn BufRead,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
        history: &'a mut History,
    ) -> Self {
        Self {
            args,
            input,
            out,
            err,
            history,
        }
    }

    /// Argument at `index` (0 is the first argument after the command name).
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Write a `<command>: <message>` diagnostic line to the error stream.
    pub fn report(&mut self, command: &str, message: impl Display) -> io::Result<()> {
        writeln!(self.err, "{command}: {message}")
    }
}

/// A builtin shell command.
///
/// Commands validate their own arguments and write their own diagnostics to
/// [`Context::err`]. Only failures writing to the context's streams are
/// propagated as `Err`.
pub trait Command {
    /// Unique registry key.
    fn name(&self) -> &'static str;

    /// Run the command with the given context.
    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion>;
}
