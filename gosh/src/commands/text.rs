//! Text builtins: `cat`, `grep`, `echo`.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};

use anyhow::Result;

use crate::command::{Command, Completion, Context};
use crate::core::grep::{MatchLabel, line_matches};
use crate::core::tokenize::strip_line_ending;

/// Concatenate files to the output stream.
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        if ctx.is_empty() {
            ctx.report("cat", "missing operand")?;
            return Ok(Completion::Continue);
        }
        for target in ctx.args {
            match fs::read(target) {
                Ok(contents) => ctx.out.write_all(&contents)?,
                Err(err) => ctx.report("cat", format_args!("{target}: {err}"))?,
            }
        }
        Ok(Completion::Continue)
    }
}

/// Print lines containing a fixed substring.
pub struct GrepCommand;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        let args = ctx.args;
        let Some((pattern, files)) = args.split_first().filter(|(_, files)| !files.is_empty())
        else {
            ctx.report("grep", "missing operand")?;
            return Ok(Completion::Continue);
        };
        let label = MatchLabel::for_file_count(files.len());

        for file in files {
            let mut reader = match File::open(file) {
                Ok(handle) => BufReader::new(handle),
                Err(err) => {
                    ctx.report("grep", format_args!("{file}: {err}"))?;
                    continue;
                }
            };
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => break,
                    Ok(_) => {
                        let raw = String::from_utf8_lossy(&buf);
                        let line = strip_line_ending(&raw);
                        if line_matches(line, pattern) {
                            writeln!(ctx.out, "{}", label.render(file, line))?;
                        }
                    }
                    Err(err) => {
                        ctx.report("grep", format_args!("{file}: {err}"))?;
                        break;
                    }
                }
            }
        }
        Ok(Completion::Continue)
    }
}

/// Print the arguments joined by single spaces.
pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        writeln!(ctx.out, "{}", ctx.args.join(" "))?;
        Ok(Completion::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Scratch, invoke};

    #[test]
    fn cat_concatenates_in_order_and_skips_failures() {
        let scratch = Scratch::new().expect("scratch");
        let a = scratch.file("a", "one\n").expect("file");
        let b = scratch.file("b", "two").expect("file");
        let missing = scratch.arg("missing");

        let run = invoke(&CatCommand, &[&b, &missing, &a]);
        assert_eq!(run.stdout_str(), "twoone\n");
        assert!(run.stderr.starts_with(&format!("cat: {missing}: ")));
    }

    #[test]
    fn cat_passes_raw_bytes_through() {
        let scratch = Scratch::new().expect("scratch");
        fs::write(scratch.join("bin"), [0xff, 0x00, 0x41]).expect("write");
        let run = invoke(&CatCommand, &[&scratch.arg("bin")]);
        assert_eq!(run.stdout, vec![0xff, 0x00, 0x41]);
    }

    #[test]
    fn cat_requires_operand() {
        assert_eq!(invoke(&CatCommand, &[]).stderr, "cat: missing operand\n");
    }

    #[test]
    fn grep_single_file_prints_bare_lines() {
        let scratch = Scratch::new().expect("scratch");
        let a = scratch.file("a.txt", "foo one\nbar\nsecond foo\n").expect("file");

        let run = invoke(&GrepCommand, &["foo", &a]);
        assert_eq!(run.stdout_str(), "foo one\nsecond foo\n");
    }

    #[test]
    fn grep_multiple_files_prefixes_file_name() {
        let scratch = Scratch::new().expect("scratch");
        let a = scratch.file("a.txt", "has foo here\nnothing\n").expect("file");
        let b = scratch.file("b.txt", "nothing at all\n").expect("file");

        let run = invoke(&GrepCommand, &["foo", &a, &b]);
        assert_eq!(run.stdout_str(), format!("{a}: has foo here\n"));
        assert!(run.stderr.is_empty());
    }

    #[test]
    fn grep_matches_lines_after_non_utf8_bytes() {
        let scratch = Scratch::new().expect("scratch");
        fs::write(scratch.join("latin1"), b"caf\xe9 foo\r\nbar\nfoo again\n").expect("write");

        let run = invoke(&GrepCommand, &["foo", &scratch.arg("latin1")]);
        assert_eq!(run.stdout_str(), "caf\u{fffd} foo\nfoo again\n");
        assert!(run.stderr.is_empty(), "stderr: {}", run.stderr);
    }

    #[test]
    fn grep_is_not_regex() {
        let scratch = Scratch::new().expect("scratch");
        let a = scratch.file("a.txt", "abc\na.c\n").expect("file");
        let run = invoke(&GrepCommand, &["a.c", &a]);
        assert_eq!(run.stdout_str(), "a.c\n");
    }

    #[test]
    fn grep_skips_unreadable_files() {
        let scratch = Scratch::new().expect("scratch");
        let missing = scratch.arg("missing");
        let a = scratch.file("a.txt", "foo\n").expect("file");

        let run = invoke(&GrepCommand, &["foo", &missing, &a]);
        assert!(run.stderr.starts_with(&format!("grep: {missing}: ")));
        assert_eq!(run.stdout_str(), format!("{a}: foo\n"));
    }

    #[test]
    fn grep_requires_pattern_and_file() {
        assert_eq!(invoke(&GrepCommand, &[]).stderr, "grep: missing operand\n");
        assert_eq!(
            invoke(&GrepCommand, &["foo"]).stderr,
            "grep: missing operand\n"
        );
    }

    #[test]
    fn echo_joins_with_single_spaces() {
        assert_eq!(invoke(&EchoCommand, &["a", "b"]).stdout_str(), "a b\n");
        assert_eq!(invoke(&EchoCommand, &[]).stdout_str(), "\n");
    }
}
