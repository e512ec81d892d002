//! # Validating Input Reader
//!
//! [`LineReader`] reads raw lines from a character stream and turns them into
//! validated field values. It runs in one of two modes:
//!
//! - **Interactive** (the primary stdin stream): prompts are printed, and a
//!   rejected value prints the error and asks again until it is accepted or the
//!   stream ends.
//! - **Script** (a file run by `execute_script`): prompts are suppressed and the
//!   first rejected value fails the read, which aborts the whole script.
//!
//! Validation messages are printed in both modes.
//!
//! Validators are plain functions returning `Result<T>`: they receive the trimmed
//! line (or `None` for an empty line) and return either the accepted value or a
//! [`BandzError::Value`]. Any other error kind stops the loop immediately.

use crate::error::{BandzError, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// A type that can be parsed out of a single input line.
pub trait FieldValue: Sized {
    fn parse_field(text: &str) -> Option<Self>;
}

impl FieldValue for i64 {
    fn parse_field(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FieldValue for f64 {
    fn parse_field(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

/// Dates are entered in ISO form, `YYYY-MM-DD`.
impl FieldValue for NaiveDate {
    fn parse_field(text: &str) -> Option<Self> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
    }
}

pub struct LineReader<'io> {
    input: Box<dyn BufRead + 'io>,
    out: &'io mut dyn Write,
    interactive: bool,
}

impl<'io> LineReader<'io> {
    /// A reader bound to the primary stream: prompts shown, rejected values retried.
    pub fn interactive(input: impl BufRead + 'io, out: &'io mut dyn Write) -> Self {
        Self {
            input: Box::new(input),
            out,
            interactive: true,
        }
    }

    /// A reader bound to a script: silent, and the first rejection is fatal.
    pub fn script(input: impl BufRead + 'io, out: &'io mut dyn Write) -> Self {
        Self {
            input: Box::new(input),
            out,
            interactive: false,
        }
    }

    /// The output sink shared by prompts, messages and nested script readers.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    pub fn prompt(&mut self, text: &str) -> Result<()> {
        if self.interactive {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        Ok(())
    }

    /// Reads one raw line without its line terminator; `None` at end of stream.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Reads a string field. Empty input reaches `accept` as `None`.
    pub fn read_string<T, F>(&mut self, prompt: &str, accept: F) -> Result<T>
    where
        F: Fn(Option<String>) -> Result<T>,
    {
        self.read_validated(prompt, accept)
    }

    /// Reads a field parsed into `V` before `accept` sees it.
    ///
    /// Text that does not parse is rejected exactly like a validator rejection,
    /// with the offending text in the message.
    pub fn read_value<V, T, F>(&mut self, prompt: &str, accept: F) -> Result<T>
    where
        V: FieldValue,
        F: Fn(Option<V>) -> Result<T>,
    {
        self.read_validated(prompt, |raw| {
            let parsed = match raw {
                None => None,
                Some(text) => match V::parse_field(&text) {
                    Some(value) => Some(value),
                    None => return Err(BandzError::value(format!("Invalid value: {}", text))),
                },
            };
            accept(parsed)
        })
    }

    fn read_validated<T, F>(&mut self, prompt: &str, attempt: F) -> Result<T>
    where
        F: Fn(Option<String>) -> Result<T>,
    {
        loop {
            self.prompt(prompt)?;
            let raw = self.read_line()?.ok_or(BandzError::InputExhausted)?;
            let trimmed = raw.trim();
            let field = (!trimmed.is_empty()).then(|| trimmed.to_string());

            match attempt(field) {
                Ok(value) => return Ok(value),
                Err(BandzError::Value(msg)) => {
                    writeln!(self.out, "Error: {}", msg)?;
                    if !self.interactive {
                        return Err(BandzError::Value(msg));
                    }
                    tracing::debug!(reason = %msg, "field rejected, asking again");
                }
                Err(other) => return Err(other),
            }
        }
    }
}

/// Validator helper: rejects an absent value with `msg`.
pub fn required<T>(value: Option<T>, msg: &str) -> Result<T> {
    value.ok_or_else(|| BandzError::value(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positive(value: Option<i64>) -> Result<i64> {
        match value {
            Some(n) if n > 0 => Ok(n),
            _ => Err(BandzError::value("must be positive")),
        }
    }

    #[test]
    fn interactive_retries_until_accepted() {
        let mut out = Vec::new();
        let value = {
            let mut reader = LineReader::interactive("-3\nabc\n\n7\n".as_bytes(), &mut out);
            reader.read_value("n: ", positive).unwrap()
        };
        assert_eq!(value, 7);

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("n: ").count(), 4);
        assert!(printed.contains("Error: must be positive"));
        assert!(printed.contains("Error: Invalid value: abc"));
    }

    #[test]
    fn script_mode_propagates_first_rejection() {
        let mut out = Vec::new();
        let err = {
            let mut reader = LineReader::script("-3\n7\n".as_bytes(), &mut out);
            reader.read_value("n: ", positive).unwrap_err()
        };
        assert!(matches!(err, BandzError::Value(_)));

        let printed = String::from_utf8(out).unwrap();
        assert!(!printed.contains("n: "), "script mode must not prompt");
        assert!(printed.contains("Error: must be positive"));
    }

    #[test]
    fn end_of_stream_exhausts_input() {
        let mut out = Vec::new();
        let mut reader = LineReader::interactive("0\n".as_bytes(), &mut out);
        let err = reader.read_value("n: ", positive).unwrap_err();
        assert!(matches!(err, BandzError::InputExhausted));
    }

    #[test]
    fn blank_line_is_absent_value() {
        let mut out = Vec::new();
        let mut reader = LineReader::script("   \n".as_bytes(), &mut out);
        let seen = reader.read_string("s: ", Ok).unwrap();
        assert_eq!(seen, None);
    }

    #[test]
    fn strings_are_trimmed() {
        let mut out = Vec::new();
        let mut reader = LineReader::script("  The Band \r\n".as_bytes(), &mut out);
        let seen = reader
            .read_string("s: ", |s| required(s, "empty"))
            .unwrap();
        assert_eq!(seen, "The Band");
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            NaiveDate::parse_field("1977-08-16"),
            NaiveDate::from_ymd_opt(1977, 8, 16)
        );
        assert_eq!(NaiveDate::parse_field("16.08.1977"), None);
    }

    #[test]
    fn read_line_reports_end_of_stream() {
        let mut out = Vec::new();
        let mut reader = LineReader::script("one\n".as_bytes(), &mut out);
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("one"));
        assert_eq!(reader.read_line().unwrap(), None);
    }
}
