use super::expect_no_args;
use crate::error::Result;
use crate::shell::{CmdMessage, CmdResult, Command, Context};

pub struct Clear;

impl Command for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "clear - remove every element from the collection"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let removed = ctx.db.collection().len();
        ctx.db.clear();
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Collection cleared ({} removed)",
            removed
        ))))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{band_lines, memory_database, run_shell};

    #[test]
    fn clear_empties_but_keeps_the_id_counter() {
        let mut db = memory_database();
        let input = format!(
            "add\n{}add\n{}clear\nadd\n{}",
            band_lines("Wire", 4, "1976-10-01"),
            band_lines("Devo", 5, "1973-04-01"),
            band_lines("Suicide", 2, "1970-01-01"),
        );
        let (_, out) = run_shell(&mut db, &input);

        assert!(out.contains("Collection cleared (2 removed)"));
        assert_eq!(db.collection().len(), 1);
        assert_eq!(db.collection().iter().next().unwrap().id(), Some(3));
    }
}
