//! # Rendering
//!
//! Turns a [`CmdResult`] into terminal text. Message levels are colored with
//! `colored`; band tables are aligned on display width, so names with wide
//! characters do not break the columns.
//!
//! Everything is written to the `&mut dyn Write` of the active reader, never
//! straight to stdout, so nested scripts and tests capture the same output a
//! user would see.

use crate::database::CollectionInfo;
use crate::error::Result;
use crate::model::Band;
use crate::shell::{CmdMessage, CmdResult, MessageLevel};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::io::Write;
use std::time::Duration;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 8] = [
    "ID",
    "Name",
    "Participants",
    "Established",
    "Genre",
    "Coordinates",
    "Best album",
    "Created",
];

pub fn print_result(out: &mut dyn Write, result: &CmdResult) -> Result<()> {
    print_messages(out, &result.messages)?;
    for band in &result.affected_bands {
        writeln!(out, "  {}", band)?;
    }
    if !result.listed_bands.is_empty() {
        print_bands(out, &result.listed_bands)?;
    }
    for date in &result.listed_dates {
        writeln!(out, "{}", date)?;
    }
    if let Some(info) = &result.info {
        print_info(out, info)?;
    }
    for line in &result.lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_messages(out: &mut dyn Write, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => {
                writeln!(out, "{}", format!("Error: {}", message.content).red())?
            }
        }
    }
    Ok(())
}

fn print_bands(out: &mut dyn Write, bands: &[Band]) -> Result<()> {
    let rows: Vec<[String; 8]> = bands.iter().map(band_row).collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| pad_to_width(h, w))
        .collect();
    writeln!(out, "{}", header.join(COLUMN_GAP).trim_end().bold())?;

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| pad_to_width(cell, w))
            .collect();
        writeln!(out, "{}", cells.join(COLUMN_GAP).trim_end())?;
    }
    Ok(())
}

fn band_row(band: &Band) -> [String; 8] {
    [
        band.id().map(|id| id.to_string()).unwrap_or_default(),
        band.name().to_string(),
        band.number_of_participants().to_string(),
        band.establishment_date().to_string(),
        band.genre().to_string(),
        band.coordinates().to_string(),
        band.best_album().to_string(),
        band.creation_date().to_string(),
    ]
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn print_info(out: &mut dyn Write, info: &CollectionInfo) -> Result<()> {
    let age = format_age(info.init_date, Local::now().date_naive());
    writeln!(out, "{}", "Collection".bold())?;
    writeln!(
        out,
        "  Type:        {} of {}",
        info.collection_type, info.element_type
    )?;
    writeln!(out, "  Location:    {}", info.location.display())?;
    writeln!(out, "  Initialized: {} ({})", info.init_date, age.dimmed())?;
    writeln!(out, "  Size:        {}", info.size)?;
    Ok(())
}

fn format_age(date: NaiveDate, today: NaiveDate) -> String {
    let days = today.signed_duration_since(date).num_days();
    if days <= 0 {
        return "today".to_string();
    }
    let elapsed = Duration::from_secs(days.unsigned_abs() * 86_400);
    Formatter::new().convert(elapsed)
}
