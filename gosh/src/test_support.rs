//! Test-only helpers for driving commands and whole sessions in memory.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tempfile::TempDir;

use crate::command::{Command, Completion, Context};
use crate::config::ShellConfig;
use crate::core::history::History;
use crate::registry::Registry;
use crate::shell::Shell;

/// Captured output of a whole shell session.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub stdout: String,
    pub stderr: String,
    pub history: Vec<String>,
}

/// Run `input` through a shell with the default config.
pub fn run_script(registry: Registry, input: &str) -> Result<Transcript> {
    run_script_with(registry, ShellConfig::default(), input)
}

/// Run `input` through a shell with an explicit config.
pub fn run_script_with(registry: Registry, config: ShellConfig, input: &str) -> Result<Transcript> {
    let mut shell = Shell::new(
        registry,
        config,
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        Vec::new(),
    );
    shell.run().context("run shell")?;
    let history = shell.history().entries().to_vec();
    let (_, out, err) = shell.into_parts();
    Ok(Transcript {
        stdout: String::from_utf8(out).context("stdout utf8")?,
        stderr: String::from_utf8(err).context("stderr utf8")?,
        history,
    })
}

/// Captured result of invoking a single command.
#[derive(Debug)]
pub struct Invocation {
    pub completion: Result<Completion>,
    pub stdout: Vec<u8>,
    pub stderr: String,
}

impl Invocation {
    pub fn stdout_str(&self) -> &str {
        std::str::from_utf8(&self.stdout).expect("stdout utf8")
    }
}

/// Invoke `command` once with `args` and an empty history.
pub fn invoke(command: &dyn Command, args: &[&str]) -> Invocation {
    invoke_with_history(command, args, &mut History::new())
}

/// Invoke `command` once with `args` against the given history.
pub fn invoke_with_history(
    command: &dyn Command,
    args: &[&str],
    history: &mut History,
) -> Invocation {
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    let mut input: &[u8] = b"";
    let mut out = Vec::new();
    let mut err = Vec::new();
    let completion = {
        let mut ctx = Context::new(&args, &mut input, &mut out, &mut err, history);
        command.execute(&mut ctx)
    };
    Invocation {
        completion,
        stdout: out,
        stderr: String::from_utf8(err).expect("stderr utf8"),
    }
}

/// Scratch directory whose paths are handed to commands as absolute strings.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir().context("create tempdir")?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Absolute path of `name` as a command argument.
    pub fn arg(&self, name: &str) -> String {
        self.join(name).to_string_lossy().into_owned()
    }

    /// Write a file and return its argument form.
    pub fn file(&self, name: &str, contents: &str) -> Result<String> {
        let path = self.join(name);
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(self.arg(name))
    }

    /// Create a directory and return its argument form.
    pub fn dir(&self, name: &str) -> Result<String> {
        let path = self.join(name);
        fs::create_dir_all(&path).with_context(|| format!("create {}", path.display()))?;
        Ok(self.arg(name))
    }
}
