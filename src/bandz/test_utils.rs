//! Shared fixtures for unit tests.

use crate::database::Database;
use crate::error::Result;
use crate::model::{Album, Band, Coordinates, Genre};
use crate::shell::{LoopExit, Registry, ScriptStack, ShellSettings};
use crate::store::memory::MemoryStore;
use crate::{commands, reader::LineReader};
use chrono::NaiveDate;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn band(name: &str, participants: i64, established: NaiveDate) -> Band {
    band_with_genre(name, participants, established, Genre::PunkRock)
}

pub fn band_with_genre(
    name: &str,
    participants: i64,
    established: NaiveDate,
    genre: Genre,
) -> Band {
    let album = Album::new(format!("{} Greatest Hits", name), 12).expect("valid album");
    let coordinates = Coordinates::new(Some(participants), 1.5).expect("valid coordinates");
    Band::new(name, coordinates, participants, established, genre, album).expect("valid band")
}

/// A band as it would come back from storage, already carrying `id`.
pub fn stored_band(id: u32, name: &str, participants: i64) -> Band {
    let mut b = band(name, participants, date(1979, 6, 1));
    b.assign_id(id).expect("fresh band");
    b
}

/// The input lines `Band::read_from` consumes for a band.
pub fn band_lines(name: &str, participants: i64, established: &str) -> String {
    format!("{name}\n10\n2.5\n{participants}\n{established}\n{name} LP\n9\npost punk\n")
}

pub fn memory_database() -> Database {
    Database::open(Box::new(MemoryStore::new())).expect("memory database")
}

/// Runs `input` through a fully registered shell as if typed at the prompt.
/// Returns how the loop ended and everything it printed.
pub fn run_shell(db: &mut Database, input: &str) -> (Result<LoopExit>, String) {
    let mut out = Vec::new();
    let exit = {
        let mut reader = LineReader::interactive(input.as_bytes(), &mut out);
        let mut registry = Registry::new(ShellSettings::default());
        commands::register_all(&mut registry);
        let mut scripts = ScriptStack::default();
        registry.run(db, &mut scripts, &mut reader)
    };
    (exit, String::from_utf8(out).expect("utf8 output"))
}
