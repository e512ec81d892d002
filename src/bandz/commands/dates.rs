use super::expect_no_args;
use crate::error::Result;
use crate::shell::{CmdMessage, CmdResult, Command, Context};

pub struct EstablishmentDates;

impl Command for EstablishmentDates {
    fn name(&self) -> &'static str {
        "print_field_descending_establishment_date"
    }

    fn description(&self) -> &'static str {
        "print_field_descending_establishment_date - print the establishment dates of all elements, newest first"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let dates: Vec<_> = ctx.db.collection().establishment_dates_descending().collect();
        if dates.is_empty() {
            return Ok(CmdResult::default().with_message(CmdMessage::info("The collection is empty.")));
        }
        Ok(CmdResult::default().with_listed_dates(dates))
    }
}
