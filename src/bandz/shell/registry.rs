use super::{CmdMessage, CmdResult, Command, Context, History, ScriptStack, DEFAULT_HISTORY_SIZE};
use crate::database::Database;
use crate::error::{BandzError, Result};
use crate::reader::LineReader;
use crate::render;
use std::collections::BTreeMap;
use std::rc::Rc;

const HINT: &str = "Type 'help' for the list of available commands\n";

/// How a dispatch loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The input stream ran out.
    EndOfInput,
    /// A command (`exit`) asked the shell to stop.
    ExitRequested,
}

/// Knobs of a registry that nested registries inherit.
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub history_size: usize,
    pub prompt: String,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            prompt: "> ".to_string(),
        }
    }
}

/// Command lookup table plus the dispatch loop that drives it.
///
/// Names are kept sorted, so `help` lists commands alphabetically. The first
/// command registered under a name wins. A derived registry registers its own
/// `help` and `history` before copying its parent's commands.
pub struct Registry {
    commands: BTreeMap<String, Rc<dyn Command>>,
    history: History,
    settings: ShellSettings,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(ShellSettings::default())
    }
}

impl Registry {
    pub fn new(settings: ShellSettings) -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
            history: History::new(settings.history_size),
            settings,
        };
        registry.register(Rc::new(HelpCommand));
        registry.register(Rc::new(HistoryCommand));
        registry
    }

    /// Returns `false` if the name was already taken.
    pub fn register(&mut self, command: Rc<dyn Command>) -> bool {
        let name = command.name();
        if self.commands.contains_key(name) {
            tracing::trace!(command = name, "already registered, skipping");
            return false;
        }
        self.commands.insert(name.to_string(), command);
        true
    }

    /// A fresh registry (own history) sharing every command of this one.
    pub fn derive(&self) -> Registry {
        let mut derived = Registry::new(self.settings.clone());
        for command in self.commands.values() {
            derived.register(Rc::clone(command));
        }
        derived
    }

    pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
        self.commands.values().map(|c| c.as_ref())
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Reads and executes commands until the input ends or `exit` is issued.
    ///
    /// Usage errors are printed and the loop goes on. Any other error ends the
    /// loop and is returned to the caller.
    pub fn run(
        &mut self,
        db: &mut Database,
        scripts: &mut ScriptStack,
        reader: &mut LineReader<'_>,
    ) -> Result<LoopExit> {
        reader.prompt(HINT)?;

        loop {
            reader.prompt(&self.settings.prompt)?;
            let Some(line) = reader.read_line()? else {
                return Ok(LoopExit::EndOfInput);
            };

            let mut tokens = line.split_whitespace().map(str::to_string);
            let Some(name) = tokens.next() else {
                reader.prompt(HINT)?;
                continue;
            };
            let args: Vec<String> = tokens.collect();

            let Some(command) = self.commands.get(&name).cloned() else {
                render::print_messages(
                    reader.out(),
                    &[CmdMessage::error(format!("Unknown command: {}", name))],
                )?;
                reader.prompt(HINT)?;
                continue;
            };

            self.history.push(command.name());
            tracing::debug!(command = %name, ?args, depth = scripts.depth(), "dispatching");

            let outcome = {
                let mut ctx = Context {
                    db: &mut *db,
                    scripts: &mut *scripts,
                    reader: &mut *reader,
                    registry: &*self,
                };
                command.execute(&mut ctx, &args)
            };

            match outcome {
                Ok(result) => {
                    render::print_result(reader.out(), &result)?;
                    if result.exit_requested {
                        return Ok(LoopExit::ExitRequested);
                    }
                }
                Err(BandzError::Usage(msg)) => {
                    render::print_messages(reader.out(), &[CmdMessage::error(msg)])?;
                    reader.prompt(HINT)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// `help`: one line per registered command.
struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "help - print the list of available commands"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        crate::commands::expect_no_args(self, args)?;
        let lines = ctx
            .registry
            .commands()
            .map(|c| c.description().to_string())
            .collect();
        Ok(CmdResult::default().with_lines(lines))
    }
}

/// `history`: the names of the last executed commands.
struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }

    fn description(&self) -> &'static str {
        "history - print the names of the most recently executed commands"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        crate::commands::expect_no_args(self, args)?;
        let lines = ctx.registry.history().iter().map(str::to_string).collect();
        Ok(CmdResult::default().with_lines(lines))
    }
}
