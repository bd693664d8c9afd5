//! File lifecycle builtins: `mkdir`, `touch`, `cp`, `mv`, `rm`, `rmdir`.

use std::fs::{self, File, FileTimes, OpenOptions};
use std::io::{self, ErrorKind};
use std::time::SystemTime;

use anyhow::Result;
use tracing::debug;

use crate::command::{Command, Completion, Context};

/// Report `<name>: missing operand` when fewer than `min` arguments were given.
///
/// Returns true when the command should stop.
fn missing_operand(ctx: &mut Context<'_>, name: &str, min: usize) -> io::Result<bool> {
    if ctx.len() < min {
        ctx.report(name, "missing operand")?;
        return Ok(true);
    }
    Ok(false)
}

/// Split `(source, destination)` from a two-operand command line.
fn two_operands<'a>(ctx: &mut Context<'a>, name: &str) -> io::Result<Option<(&'a str, &'a str)>> {
    if missing_operand(ctx, name, 2)? {
        return Ok(None);
    }
    if ctx.len() > 2 {
        ctx.report(name, "too many arguments")?;
        return Ok(None);
    }
    match (ctx.arg(0), ctx.arg(1)) {
        (Some(source), Some(destination)) => Ok(Some((source, destination))),
        _ => Ok(None),
    }
}

/// Create each named directory.
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        if missing_operand(ctx, "mkdir", 1)? {
            return Ok(Completion::Continue);
        }
        for target in ctx.args {
            if let Err(err) = fs::create_dir(target) {
                ctx.report("mkdir", format_args!("{target}: {err}"))?;
            }
        }
        Ok(Completion::Continue)
    }
}

/// Create empty files or bump the timestamps of existing ones.
pub struct TouchCommand;

impl TouchCommand {
    fn bump(target: &str) -> io::Result<()> {
        let now = SystemTime::now();
        // Write-only files cannot be opened for reading.
        let file = match File::open(target) {
            Err(err) if err.kind() == ErrorKind::PermissionDenied => {
                OpenOptions::new().write(true).open(target)?
            }
            opened => opened?,
        };
        file.set_times(FileTimes::new().set_accessed(now).set_modified(now))
    }
}

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        if missing_operand(ctx, "touch", 1)? {
            return Ok(Completion::Continue);
        }
        for target in ctx.args {
            let outcome = match fs::metadata(target) {
                Ok(_) => Self::bump(target),
                Err(err) if err.kind() == ErrorKind::NotFound => File::create(target).map(drop),
                Err(err) => Err(err),
            };
            if let Err(err) = outcome {
                ctx.report("touch", format_args!("{target}: {err}"))?;
            }
        }
        Ok(Completion::Continue)
    }
}

/// Copy one file's bytes into another.
pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        let Some((source, destination)) = two_operands(ctx, "cp")? else {
            return Ok(Completion::Continue);
        };
        let mut reader = match File::open(source) {
            Ok(file) => file,
            Err(err) => {
                ctx.report("cp", format_args!("{source}: {err}"))?;
                return Ok(Completion::Continue);
            }
        };
        let mut writer = match File::create(destination) {
            Ok(file) => file,
            Err(err) => {
                ctx.report("cp", format_args!("{destination}: {err}"))?;
                return Ok(Completion::Continue);
            }
        };
        match io::copy(&mut reader, &mut writer) {
            Ok(bytes) => debug!(source, destination, bytes, "copied"),
            Err(err) => ctx.report("cp", format_args!("{destination}: {err}"))?,
        }
        Ok(Completion::Continue)
    }
}

/// Rename a file or directory.
pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        let Some((source, destination)) = two_operands(ctx, "mv")? else {
            return Ok(Completion::Continue);
        };
        if let Err(err) = fs::rename(source, destination) {
            ctx.report("mv", format_args!("{destination}: {err}"))?;
        }
        Ok(Completion::Continue)
    }
}

/// Remove files, or whole trees with a leading `-r`.
pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        if missing_operand(ctx, "rm", 1)? {
            return Ok(Completion::Continue);
        }
        let args = ctx.args;
        let (recursive, targets) = match args.split_first() {
            Some((flag, rest)) if flag == "-r" => (true, rest),
            _ => (false, args),
        };
        if targets.is_empty() {
            ctx.report("rm", "missing operand after -r")?;
            return Ok(Completion::Continue);
        }

        for target in targets {
            let meta = match fs::symlink_metadata(target) {
                Ok(meta) => meta,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    ctx.report("rm", format_args!("{target}: No such file or directory"))?;
                    continue;
                }
                Err(err) => {
                    ctx.report("rm", format_args!("{target}: {err}"))?;
                    continue;
                }
            };

            let removed = if !meta.is_dir() {
                fs::remove_file(target)
            } else if recursive {
                fs::remove_dir_all(target)
            } else {
                ctx.report("rm", format_args!("{target}: is a directory"))?;
                continue;
            };
            if let Err(err) = removed {
                ctx.report("rm", format_args!("{target}: {err}"))?;
            }
        }
        Ok(Completion::Continue)
    }
}

/// Remove empty directories.
pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        if missing_operand(ctx, "rmdir", 1)? {
            return Ok(Completion::Continue);
        }
        for target in ctx.args {
            match fs::symlink_metadata(target) {
                Ok(meta) if meta.is_dir() => {
                    if let Err(err) = fs::remove_dir(target) {
                        ctx.report("rmdir", format_args!("{target}: {err}"))?;
                    }
                }
                Ok(_) => ctx.report("rmdir", format_args!("{target}: not a directory"))?,
                Err(err) if err.kind() == ErrorKind::NotFound => {
                    ctx.report("rmdir", format_args!("{target}: No such directory"))?;
                }
                Err(err) => ctx.report("rmdir", format_args!("{target}: {err}"))?,
            }
        }
        Ok(Completion::Continue)
    }
}
