//! CLI tests for the `gosh` binary.
//!
//! Spawns the binary in a scratch working directory, feeds a session on
//! stdin, and checks the two output streams and the exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use gosh::exit_codes;

fn run_gosh(dir: &std::path::Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gosh"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn gosh");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait gosh")
}

#[test]
fn session_runs_builtins_against_working_directory() {
    let temp = tempfile::tempdir().expect("tempdir");
    let script = "mkdir d\ntouch d/a.txt\nls d\nfoo\n\nrm d\nhistory\nexit\necho never\n";

    let output = run_gosh(temp.path(), &[], script);
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let stderr = String::from_utf8(output.stderr).expect("utf8");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout.starts_with("gosh> "));
    assert!(stdout.contains("a.txt\n"));
    assert!(stdout.contains("Command not found: foo\n"));
    assert!(stdout.contains("1  mkdir d\n2  touch d/a.txt\n3  ls d\n4  foo\n5  rm d\n6  history\n"));
    assert!(stdout.ends_with("Goodbye!\n"));
    assert!(!stdout.contains("never"));
    assert_eq!(stderr, "rm: d: is a directory\n");
    assert!(temp.path().join("d/a.txt").is_file());
}

#[test]
fn end_of_input_exits_cleanly_without_farewell() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_gosh(temp.path(), &[], "echo a  b\n");
    let stdout = String::from_utf8(output.stdout).expect("utf8");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout, "gosh> a b\ngosh> ");
    assert!(output.stderr.is_empty());
}

#[test]
fn config_file_and_prompt_flag() {
    let temp = tempfile::tempdir().expect("tempdir");
    std::fs::write(
        temp.path().join("gosh.toml"),
        "prompt = \"% \"\nfarewell = \"later\"\n",
    )
    .expect("write config");

    let output = run_gosh(temp.path(), &["--config", "gosh.toml"], "exit\n");
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), "% later\n");

    let output = run_gosh(
        temp.path(),
        &["--config", "gosh.toml", "--prompt", "> "],
        "exit\n",
    );
    assert_eq!(String::from_utf8(output.stdout).expect("utf8"), "> later\n");
}

#[test]
fn missing_config_exits_with_invalid_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let output = run_gosh(temp.path(), &["--config", "nope.toml"], "");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).expect("utf8").contains("nope.toml"));
}
