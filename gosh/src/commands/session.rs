//! Session builtins: `exit`, `history`.

use anyhow::Result;

use crate::command::{Command, Completion, Context};

/// Print a farewell line and stop the shell.
pub struct ExitCommand {
    farewell: String,
}

impl ExitCommand {
    pub fn new(farewell: impl Into<String>) -> Self {
        Self {
            farewell: farewell.into(),
        }
    }
}

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        writeln!(ctx.out, "{}", self.farewell)?;
        Ok(Completion::Exit)
    }
}

/// List the session's input lines, 1-indexed.
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<Completion> {
        if !ctx.is_empty() {
            ctx.report("history", "too many arguments")?;
            return Ok(Completion::Continue);
        }
        for (i, entry) in ctx.history.entries().iter().enumerate() {
            writeln!(ctx.out, "{}  {}", i + 1, entry)?;
        }
        Ok(Completion::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::history::History;
    use crate::test_support::{invoke, invoke_with_history};

    #[test]
    fn exit_requests_stop() {
        let run = invoke(&ExitCommand::new("Goodbye!"), &[]);
        assert_eq!(run.stdout_str(), "Goodbye!\n");
        assert!(matches!(run.completion, Ok(Completion::Exit)));
    }

    #[test]
    fn history_is_one_indexed() {
        let mut history = History::new();
        history.push("pwd");
        history.push("echo hi");

        let run = invoke_with_history(&HistoryCommand, &[], &mut history);
        assert_eq!(run.stdout_str(), "1  pwd\n2  echo hi\n");
    }

    #[test]
    fn history_rejects_arguments() {
        let mut history = History::new();
        history.push("pwd");
        let run = invoke_with_history(&HistoryCommand, &["clear"], &mut history);
        assert_eq!(run.stderr, "history: too many arguments\n");
        assert!(run.stdout.is_empty());
        assert_eq!(history.len(), 1);
    }
}
