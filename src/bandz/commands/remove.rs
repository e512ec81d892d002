use super::{expect_no_args, parse_id};
use crate::error::Result;
use crate::model::Band;
use crate::shell::{CmdMessage, CmdResult, Command, Context};

pub struct RemoveById;

impl Command for RemoveById {
    fn name(&self) -> &'static str {
        "remove_by_id"
    }

    fn description(&self) -> &'static str {
        "remove_by_id id - remove the element with the given id"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        let id = parse_id(self, args)?;
        let message = if ctx.db.remove_by_id(id) {
            CmdMessage::success(format!("Removed band #{}", id))
        } else {
            CmdMessage::warning(format!("No band with id {} in the collection", id))
        };
        Ok(CmdResult::default().with_message(message))
    }
}

/// Reads a band and removes everything strictly greater than it.
pub struct RemoveGreater;

impl Command for RemoveGreater {
    fn name(&self) -> &'static str {
        "remove_greater"
    }

    fn description(&self) -> &'static str {
        "remove_greater - remove every element greater than the one entered"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let pivot = Band::read_from(ctx.reader)?;
        let removed = ctx.db.remove_greater(&pivot);
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Removed bands: {}",
            removed
        ))))
    }
}
