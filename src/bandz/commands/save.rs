use super::expect_no_args;
use crate::error::{BandzError, Result};
use crate::shell::{CmdMessage, CmdResult, Command, Context};

/// Persists the collection. Storage failures are reported, not fatal: the
/// session keeps its in-memory state and the user can retry.
pub struct Save;

impl Command for Save {
    fn name(&self) -> &'static str {
        "save"
    }

    fn description(&self) -> &'static str {
        "save - save the collection to its file"
    }

    fn execute(&self, ctx: &mut Context<'_, '_>, args: &[String]) -> Result<CmdResult> {
        expect_no_args(self, args)?;
        let message = match ctx.db.save() {
            Ok(()) => CmdMessage::success(format!(
                "Collection saved to {}",
                ctx.db.location().display()
            )),
            Err(BandzError::Database(reason)) => {
                tracing::warn!(%reason, "save failed");
                CmdMessage::error(reason)
            }
            Err(e) => return Err(e),
        };
        Ok(CmdResult::default().with_message(message))
    }
}

#[cfg(test)]
mod tests {
    use crate::database::Database;
    use crate::store::fs::JsonFileStore;
    use crate::test_utils::{band_lines, run_shell};
    use std::fs;

    #[test]
    fn save_persists_the_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.json");
        let mut db = Database::open(Box::new(JsonFileStore::new(&path))).unwrap();

        let input = format!("add\n{}save\n", band_lines("Wire", 4, "1976-10-01"));
        let (_, out) = run_shell(&mut db, &input);
        assert!(out.contains("Collection saved to"));

        let reopened = Database::open(Box::new(JsonFileStore::new(&path))).unwrap();
        assert_eq!(reopened.collection().len(), 1);
    }

    #[test]
    fn failed_save_is_reported_and_the_session_goes_on() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bands.json");
        let mut db = Database::open(Box::new(JsonFileStore::new(&path))).unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        let (exit, out) = run_shell(&mut db, "save\ninfo\n");
        assert!(exit.is_ok());
        assert!(out.contains("File is not writable"));
        assert!(out.contains("BandCollection"));
    }
}
