//! # Command Layer
//!
//! One submodule per group of shell commands. Each command is a unit struct
//! implementing [`Command`]; [`register_all`] installs every one of them in a
//! top-level [`Registry`].
//!
//! Commands return a [`CmdResult`](crate::shell::CmdResult) and never print
//! directly. The only terminal interaction they perform is reading a band
//! through the context's [`LineReader`](crate::reader::LineReader), which is
//! where prompts and field validation happen.
//!
//! ## Arguments
//!
//! Arity and argument format problems are `Usage` errors. The dispatch loop
//! prints them and keeps going, so a typo never ends a script or a session.
//! Use [`expect_no_args`] and [`parse_id`] rather than inspecting `args` by hand
//! so every command words these errors the same way.
//!
//! ## Command Modules
//!
//! - [`add`]: `add`, `add_if_max`
//! - [`clear`]: `clear`
//! - [`dates`]: `print_field_descending_establishment_date`
//! - [`exit`]: `exit`
//! - [`info`]: `info`
//! - [`participants`]: `average_of_number_of_participants`, `sum_of_number_of_participants`
//! - [`remove`]: `remove_by_id`, `remove_greater`
//! - [`save`]: `save`
//! - [`script`]: `execute_script`
//! - [`show`]: `show`
//! - [`update`]: `update`

use crate::error::{BandzError, Result};
use crate::shell::{Command, Registry};
use std::rc::Rc;

pub mod add;
pub mod clear;
pub mod dates;
pub mod exit;
pub mod info;
pub mod participants;
pub mod remove;
pub mod save;
pub mod script;
pub mod show;
pub mod update;

/// Registers every collection command. `help` and `history` come with the
/// registry itself.
pub fn register_all(registry: &mut Registry) {
    let commands: Vec<Rc<dyn Command>> = vec![
        Rc::new(add::Add),
        Rc::new(add::AddIfMax),
        Rc::new(clear::Clear),
        Rc::new(dates::EstablishmentDates),
        Rc::new(script::ExecuteScript),
        Rc::new(exit::Exit),
        Rc::new(info::Info),
        Rc::new(participants::Average),
        Rc::new(participants::Sum),
        Rc::new(remove::RemoveById),
        Rc::new(remove::RemoveGreater),
        Rc::new(save::Save),
        Rc::new(show::Show),
        Rc::new(update::Update),
    ];
    for command in commands {
        registry.register(command);
    }
}

pub fn expect_no_args(command: &dyn Command, args: &[String]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(BandzError::usage(format!(
            "Command '{}' takes no arguments",
            command.name()
        )))
    }
}

/// The single positive id argument of `remove_by_id` and `update`.
pub fn parse_id(command: &dyn Command, args: &[String]) -> Result<u32> {
    let [raw] = args else {
        return Err(BandzError::usage(format!(
            "Command '{}' takes exactly one argument: the band id",
            command.name()
        )));
    };
    raw.parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| BandzError::usage(format!("Invalid id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zero_arg_commands_reject_arguments() {
        assert!(expect_no_args(&show::Show, &[]).is_ok());
        let err = expect_no_args(&show::Show, &args(&["1"])).unwrap_err();
        assert!(matches!(err, BandzError::Usage(msg) if msg.contains("'show'")));
    }

    #[test]
    fn ids_must_be_single_positive_integers() {
        assert_eq!(parse_id(&remove::RemoveById, &args(&["12"])).unwrap(), 12);
        for bad in [&[][..], &["1", "2"][..], &["abc"][..], &["0"][..], &["-4"][..]] {
            let err = parse_id(&remove::RemoveById, &args(bad)).unwrap_err();
            assert!(matches!(err, BandzError::Usage(_)), "{:?}", bad);
        }
    }
}
