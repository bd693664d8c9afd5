//! Navigation builtins: `cd`, `pwd`, `ls`.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::command::{Command, Completion, Context};
use crate::core::tilde::expand_tilde;

/// Resolves the current user's home directory.
pub type HomeResolver = Box<dyn Fn() -> Option<PathBuf>>;

/// Change the process working directory.
pub struct CdCommand {
    home: HomeResolver,
}

impl CdCommand {
    /// `cd` resolving home through the host platform.
    pub fn new() -> Self {
        Self::with_home(Box::new(dirs::home_dir))
    }

    pub fn with_home(home: HomeResolver) -> Self {
        Self { home }
    }
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        if ctx.len() > 1 {
            ctx.report("cd", "too many arguments")?;
            return Ok(Completion::Continue);
        }
        let target = match expand_tilde(ctx.arg(0).unwrap_or("~"), || (self.home)()) {
            Ok(target) => target,
            Err(err) => {
                ctx.report("cd", err)?;
                return Ok(Completion::Continue);
            }
        };
        debug!(target = %target.display(), "changing directory");
        if let Err(err) = env::set_current_dir(&target) {
            ctx.report("cd", format_args!("{}: {err}", target.display()))?;
        }
        Ok(Completion::Continue)
    }
}

/// Print the absolute working directory.
pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        match env::current_dir() {
            Ok(dir) => writeln!(ctx.out, "{}", dir.display())?,
            Err(err) => ctx.report("pwd", err)?,
        }
        Ok(Completion::Continue)
    }
}

/// List directory entries, directories suffixed with `/`.
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        let current = [".".to_string()];
        let targets = if ctx.is_empty() { &current[..] } else { ctx.args };
        let with_headers = targets.len() > 1;

        for (i, target) in targets.iter().enumerate() {
            if with_headers {
                if i > 0 {
                    writeln!(ctx.out)?;
                }
                writeln!(ctx.out, "{target}:")?;
            }

            let entries = match fs::read_dir(target) {
                Ok(entries) => entries,
                Err(err) => {
                    ctx.report("ls", format_args!("cannot access {target}: {err}"))?;
                    continue;
                }
            };

            let mut names = Vec::new();
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        ctx.report("ls", format_args!("{target}: {err}"))?;
                        continue;
                    }
                };
                let is_dir = entry.file_type().is_ok_and(|kind| kind.is_dir());
                let mut name = entry.file_name().to_string_lossy().into_owned();
                if is_dir {
                    name.push('/');
                }
                names.push(name);
            }
            names.sort();
            for name in &names {
                writeln!(ctx.out, "{name}")?;
            }
        }
        Ok(Completion::Continue)
    }
}
