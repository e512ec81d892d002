use super::expect_no_args;
use crate::error::Result;
use crate::shell::{CmdMessage, CmdResult, Command, Context};

pub struct Show;

impl Command for Show {
    fn name(&self) -> &'static str {
        "show"
    }

    fn description(&self) -> &'static str {
        "show - print every element of the collection"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let collection = ctx.db.collection();
        if collection.is_empty() {
            return Ok(CmdResult::default().with_message(CmdMessage::info("The collection is empty.")));
        }
        Ok(CmdResult::default().with_listed_bands(collection.iter().cloned().collect()))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{band_lines, memory_database, run_shell};

    #[test]
    fn show_lists_bands_in_order() {
        let mut db = memory_database();
        let input = format!(
            "add\n{}add\n{}show\n",
            band_lines("Wire", 4, "1976-10-01"),
            band_lines("Devo", 5, "1973-04-01"),
        );
        let (_, out) = run_shell(&mut db, &input);

        let table = &out[out.rfind("Name").unwrap()..];
        let devo = table.find("Devo").unwrap();
        let wire = table.find("Wire").unwrap();
        assert!(devo < wire);
        assert!(table.contains("'post punk'"));
    }

    #[test]
    fn show_on_empty_collection() {
        let mut db = memory_database();
        let (_, out) = run_shell(&mut db, "show\n");
        assert!(out.contains("The collection is empty."));
    }
}
