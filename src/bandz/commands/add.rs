use super::expect_no_args;
use crate::error::{BandzError, Result};
use crate::model::Band;
use crate::shell::{CmdMessage, CmdResult, Command, Context};

pub struct Add;

impl Command for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn description(&self) -> &'static str {
        "add - add a new element to the collection"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let band = Band::read_from(ctx.reader)?;
        match ctx.db.add(band) {
            Ok(id) => Ok(added(ctx, id)),
            Err(e) => not_added(e),
        }
    }
}

pub struct AddIfMax;

impl Command for AddIfMax {
    fn name(&self) -> &'static str {
        "add_if_max"
    }

    fn description(&self) -> &'static str {
        "add_if_max - add a new element if it is greater than the largest element of the collection"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let band = Band::read_from(ctx.reader)?;
        match ctx.db.add_if_max(band) {
            Ok(Some(id)) => Ok(added(ctx, id)),
            Err(e) => not_added(e),
            Ok(None) => Ok(CmdResult::default().with_message(CmdMessage::info(
                "Nothing added: the band is not greater than the largest one",
            ))),
        }
    }
}

fn added(ctx: &Context<'_, '_>, id: u32) -> CmdResult {
    let bands = ctx.db.find(id).cloned().into_iter().collect();
    CmdResult::default()
        .with_message(CmdMessage::success(format!("Added band #{}", id)))
        .with_affected_bands(bands)
}

/// A full id counter is reported; the session goes on.
fn not_added(e: BandzError) -> Result<CmdResult> {
    match e {
        BandzError::Database(msg) => Ok(CmdResult::default().with_message(CmdMessage::error(msg))),
        e => Err(e),
    }
}
