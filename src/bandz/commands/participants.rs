use super::expect_no_args;
use crate::error::Result;
use crate::shell::{CmdResult, Command, Context};

/// Integer average; 0 for an empty collection.
pub struct Average;

impl Command for Average {
    fn name(&self) -> &'static str {
        "average_of_number_of_participants"
    }

    fn description(&self) -> &'static str {
        "average_of_number_of_participants - print the average number of participants of all elements"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let average = ctx.db.collection().average_participants();
        Ok(CmdResult::default().with_lines(vec![format!("Average: {}", average)]))
    }
}

pub struct Sum;

impl Command for Sum {
    fn name(&self) -> &'static str {
        "sum_of_number_of_participants"
    }

    fn description(&self) -> &'static str {
        "sum_of_number_of_participants - print the total number of participants of all elements"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let sum = ctx.db.collection().sum_participants();
        Ok(CmdResult::default().with_lines(vec![format!("Sum: {}", sum)]))
    }
}
