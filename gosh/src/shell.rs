//! The read-eval-print loop.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use tracing::{debug, warn};

use crate::command::{Completion, Context};
use crate::config::ShellConfig;
use crate::core::history::History;
use crate::core::tokenize::{strip_line_ending, tokenize};
use crate::registry::Registry;

/// Interactive shell over arbitrary input/output streams.
pub struct Shell<R, W, E> {
    registry: Registry,
    config: ShellConfig,
    input: R,
    out: W,
    err: E,
    history: History,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(registry: Registry, config: ShellConfig, input: R, out: W, err: E) -> Self {
        Self {
            registry,
            config,
            input,
            out,
            err,
            history: History::new(),
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Consume the shell and hand back its streams.
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.out, self.err)
    }

    /// Run until end of input or until a command requests exit.
    ///
    /// Errors are limited to faults of the streams themselves (writing the
    /// prompt, reading a line). Command failures never end the loop.
    pub fn run(&mut self) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", self.config.prompt).context("write prompt")?;
            self.out.flush().context("flush prompt")?;

            buf.clear();
            let read = self
                .input
                .read_until(b'\n', &mut buf)
                .context("read input line")?;
            if read == 0 {
                debug!(entries = self.history.len(), "end of input");
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            if self.dispatch(strip_line_ending(&line))? == Completion::Exit {
                debug!("exit requested");
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, raw: &str) -> Result<Completion> {
        let tokens = tokenize(raw);
        let Some((name, args)) = tokens.split_first() else {
            return Ok(Completion::Continue);
        };
        self.history.push(raw);

        let Some(command) = self.registry.lookup(name) else {
            debug!(name, "command not found");
            writeln!(self.out, "Command not found: {name}").context("write output")?;
            return Ok(Completion::Continue);
        };

        debug!(name, args = args.len(), "dispatching");
        let result = {
            let mut ctx = Context::new(
                args,
                &mut self.input,
                &mut self.out,
                &mut self.err,
                &mut self.history,
            );
            command.execute(&mut ctx)
        };

        match result {
            Ok(completion) => Ok(completion),
            Err(err) => {
                warn!(name, err = %err, "command failed");
                writeln!(self.err, "Error executing {name}: {err:#}")
                    .context("write error output")?;
                Ok(Completion::Continue)
            }
        }
    }
}
