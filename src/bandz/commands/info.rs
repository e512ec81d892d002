use super::expect_no_args;
use crate::error::Result;
use crate::shell::{CmdResult, Command, Context};

pub struct Info;

impl Command for Info {
    fn name(&self) -> &'static str {
        "info"
    }

    fn description(&self) -> &'static str {
        "info - print information about the collection"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        Ok(CmdResult::default().with_info(ctx.db.info()))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{band_lines, memory_database, run_shell};

    #[test]
    fn info_reports_type_location_and_size() {
        let mut db = memory_database();
        let input = format!("add\n{}info\n", band_lines("Wire", 4, "1976-10-01"));
        let (_, out) = run_shell(&mut db, &input);

        assert!(out.contains("BandCollection"));
        assert!(out.contains("memory://bands.json"));
        assert!(out.contains(&db.info().init_date.to_string()));
        assert!(out.contains("Size:"));
    }
}
