use super::expect_no_args;
use crate::error::Result;
use crate::shell::{CmdResult, Command, Context};

/// Stops the shell without saving. Inside a script this ends every
/// enclosing loop as well, not just the script.
pub struct Exit;

impl Command for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "exit - quit without saving the collection"
    }

    fn execute(&self, _ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        Ok(CmdResult::exit())
    }
}

#[cfg(test)]
mod tests {
    use crate::shell::LoopExit;
    use crate::test_utils::{band_lines, memory_database, run_shell};

    #[test]
    fn exit_stops_reading_input() {
        let mut db = memory_database();
        let input = format!("exit\nadd\n{}", band_lines("Wire", 4, "1976-10-01"));
        let (exit, _) = run_shell(&mut db, &input);

        assert_eq!(exit.unwrap(), LoopExit::ExitRequested);
        assert!(db.collection().is_empty());
    }

    #[test]
    fn exit_with_arguments_is_a_usage_error() {
        let mut db = memory_database();
        let (exit, out) = run_shell(&mut db, "exit now\n");
        assert_eq!(exit.unwrap(), LoopExit::EndOfInput);
        assert!(out.contains("takes no arguments"));
    }
}
