//! Minimal interactive command shell.
//!
//! A fixed set of builtin commands is dispatched over a read-eval-print loop.
//! The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic helpers (tokenizing, tilde expansion,
//!   grep formatting, the history log). No I/O.
//! - **[`commands`]**: The builtins. Side-effecting; they talk to the host
//!   filesystem and write to the streams handed to them in a [`Context`].
//!
//! [`Registry`] maps names to [`Command`] handlers and [`Shell`] runs the loop
//! over any `BufRead`/`Write` streams.

pub mod command;
pub mod commands;
pub mod config;
pub mod core;
pub mod exit_codes;
pub mod logging;
pub mod registry;
pub mod shell;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use command::{Command, Completion, Context};
pub use registry::Registry;
pub use shell::Shell;
