//! # Command Interpreter
//!
//! The interpreter reads one line at a time, looks the first word up in a
//! [`Registry`] and executes the matching [`Command`] with the remaining words
//! as arguments.
//!
//! ## Nesting
//!
//! `execute_script` runs a *nested* loop: a registry derived from the invoking
//! one (same command instances, fresh history) reading from the script file in
//! script mode. All loops share one [`Database`] and one [`ScriptStack`], which
//! are threaded through by `&mut` in a [`Context`] rather than held globally.
//!
//! ## Results
//!
//! Commands don't print. They return a [`CmdResult`] describing what happened
//! (bands listed, dates, info, messages) and the loop renders it. The only
//! output a command produces directly is through the [`LineReader`] while
//! reading a record (prompts and validation messages).

use crate::database::{CollectionInfo, Database};
use crate::error::Result;
use crate::model::Band;
use crate::reader::LineReader;
use chrono::NaiveDate;

mod history;
mod registry;
mod scripts;

pub use history::{History, DEFAULT_HISTORY_SIZE};
pub use registry::{LoopExit, Registry, ShellSettings};
pub use scripts::{ScriptGuard, ScriptStack};

/// A named operation of the shell.
pub trait Command {
    /// The word typed to invoke the command.
    fn name(&self) -> &'static str;

    /// One usage line, printed by `help`.
    fn description(&self) -> &'static str;

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult>;
}

/// Everything a command can touch while it runs.
pub struct Context<'a, 'io> {
    pub db: &'a mut Database,
    pub scripts: &'a mut ScriptStack,
    pub reader: &'a mut LineReader<'io>,
    pub registry: &'a Registry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Bands added or changed by the command.
    pub affected_bands: Vec<Band>,
    /// Bands to display as a table.
    pub listed_bands: Vec<Band>,
    pub listed_dates: Vec<NaiveDate>,
    pub info: Option<CollectionInfo>,
    /// Plain lines printed as-is (help, history).
    pub lines: Vec<String>,
    pub messages: Vec<CmdMessage>,
    pub exit_requested: bool,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_bands(mut self, bands: Vec<Band>) -> Self {
        self.affected_bands = bands;
        self
    }

    pub fn with_listed_bands(mut self, bands: Vec<Band>) -> Self {
        self.listed_bands = bands;
        self
    }

    pub fn with_listed_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.listed_dates = dates;
        self
    }

    pub fn with_info(mut self, info: CollectionInfo) -> Self {
        self.info = Some(info);
        self
    }

    pub fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.lines = lines;
        self
    }

    pub fn exit() -> Self {
        Self {
            exit_requested: true,
            ..Self::default()
        }
    }
}
