use super::parse_id;
use crate::error::Result;
use crate::model::Band;
use crate::shell::{CmdMessage, CmdResult, Command, Context};

/// Replaces the fields of an existing band. The id is checked before any
/// field is read, so an unknown id never prompts for a record.
pub struct Update;

impl Command for Update {
    fn name(&self) -> &'static str {
        "update"
    }

    fn description(&self) -> &'static str {
        "update id - replace the fields of the element with the given id"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        let id = parse_id(self, args)?;
        if ctx.db.find(id).is_none() {
            return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
                "No band with id {} in the collection",
                id
            ))));
        }

        let band = Band::read_from(ctx.reader)?;
        ctx.db.update(id, band);
        let updated = ctx.db.find(id).cloned().into_iter().collect();
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("Updated band #{}", id)))
            .with_affected_bands(updated))
    }
}
