use crate::error::{BandzError, Result};
use crate::reader::LineReader;
use crate::shell::{CmdMessage, CmdResult, Command, Context, LoopExit};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Runs the commands of a file in a nested loop.
///
/// The nested loop gets a registry derived from the invoking one and a
/// script-mode reader over the file that writes to the same output. The
/// script's canonical path stays on the [`ScriptStack`](crate::shell::ScriptStack)
/// until the nested loop returns, so a script reached again through any chain
/// of `execute_script` calls is refused before it runs. A script that fails,
/// including one whose bytes cannot be read as text, is reported and the
/// invoking loop carries on.
pub struct ExecuteScript;

impl Command for ExecuteScript {
    fn name(&self) -> &'static str {
        "execute_script"
    }

    fn description(&self) -> &'static str {
        "execute_script file_name - read and run the commands of a script file"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        let [raw] = args else {
            return Err(BandzError::usage(format!(
                "Command '{}' takes exactly one argument: the script file",
                self.name()
            )));
        };

        let path = Path::new(raw);
        if !path.exists() {
            return Ok(failure(format!("File does not exist: {}", raw)));
        }
        if !path.is_file() {
            return Ok(failure(format!("Cannot read file: {}", raw)));
        }
        let opened = fs::canonicalize(path).and_then(|p| File::open(&p).map(|f| (p, f)));
        let (canonical, file) = match opened {
            Ok(opened) => opened,
            Err(e) => {
                tracing::debug!(path = %raw, error = %e, "cannot open script");
                return Ok(failure(format!("Cannot read file: {}", raw)));
            }
        };

        let mut guard = match ctx.scripts.enter(canonical.clone()) {
            Ok(guard) => guard,
            Err(e @ BandzError::ScriptCycle(_)) => {
                tracing::warn!(path = %canonical.display(), "script cycle refused");
                return Ok(failure(e.to_string()));
            }
            Err(e) => return Err(e),
        };

        let mut reader = LineReader::script(BufReader::new(file), ctx.reader.out());
        let mut nested = ctx.registry.derive();
        match nested.run(ctx.db, &mut guard, &mut reader) {
            Ok(LoopExit::EndOfInput) => Ok(CmdResult::default()),
            Ok(LoopExit::ExitRequested) => Ok(CmdResult::exit()),
            Err(e @ (BandzError::Value(_) | BandzError::InputExhausted | BandzError::Io(_))) => {
                tracing::warn!(path = %canonical.display(), reason = %e, "script aborted");
                Ok(failure(format!(
                    "Script execution aborted: {}: {}",
                    canonical.display(),
                    e
                )))
            }
            Err(e) => Err(e),
        }
    }
}

fn failure(message: String) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(message))
}
