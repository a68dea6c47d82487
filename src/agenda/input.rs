//! # Input Validators
//!
//! Two halves:
//!
//! - Pure parse functions ([`parse_int`], [`parse_text`], [`parse_datetime`]) that
//!   turn one line of text into a value or an [`InputError`]. No I/O.
//! - [`Prompter`], which writes a prompt, reads a line and retries until the parse
//!   function succeeds. Syntax errors never escape the prompter; the only error
//!   it returns is `AgendaError::InputClosed` (or an I/O failure).
//!
//! ## Accepted date formats
//!
//! Tried in this order, first match wins. Date-only formats mean midnight.
//!
//! | Pattern            | Example            |
//! |--------------------|--------------------|
//! | `YYYY-MM-DD HH:MM` | `2025-10-15 14:30` |
//! | `YYYY/MM/DD HH:MM` | `2025/10/15 14:30` |
//! | `DD/MM/YYYY HH:MM` | `15/10/2025 14:30` |
//! | `DD-MM-YYYY HH:MM` | `15-10-2025 14:30` |
//! | `YYYY-MM-DD`       | `2025-10-15`       |
//! | `DD/MM/YYYY`       | `15/10/2025`       |
//! | `DD-MM-YYYY`       | `15-10-2025`       |
//!
//! The year is always exactly four digits; `15/10/25` and signed years such as
//! `+2025-10-15` are rejected. Day and month take one or two digits.
//!
//! After those, a fixed ISO-8601 set is accepted (`2025-10-15T14:30`,
//! `2025-10-15T14:30:00`, `2025-10-15 14:30:00`). There is no locale-dependent
//! parsing: the same input parses the same way on every machine.

use crate::error::{AgendaError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;
use std::io::{BufRead, Write};
use thiserror::Error;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

const ISO_FALLBACK_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Why a line of input was rejected. The `Display` text is shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Entrada inválida. Ingrese un número entero (ej.: 10).")]
    NotANumber,

    #[error("Número fuera de rango para int.")]
    OutOfRange,

    #[error("El campo no puede estar vacío.")]
    Empty,

    #[error("Fecha inválida. Ejemplos: 2025-10-15 14:30 | 15/10/2025 14:30")]
    InvalidDate,
}

pub fn parse_int(raw: &str) -> std::result::Result<i32, InputError> {
    use std::num::IntErrorKind;

    raw.trim().parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::OutOfRange,
        _ => InputError::NotANumber,
    })
}

pub fn parse_text(raw: &str) -> std::result::Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Checks the date part (before a space or `T`) is `YYYY?MM?DD` or `DD?MM?YYYY`
/// with `-` or `/` separators and digits only.
fn has_four_digit_year(text: &str) -> bool {
    let date = text.split([' ', 'T']).next().unwrap_or_default();
    let fields: Vec<&str> = date.split(['-', '/']).collect();
    if fields.len() != 3
        || !fields
            .iter()
            .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
    {
        return false;
    }
    let short = |f: &str| f.len() <= 2;
    (fields[0].len() == 4 && short(fields[1]) && short(fields[2]))
        || (fields[2].len() == 4 && short(fields[0]) && short(fields[1]))
}

pub fn parse_datetime(raw: &str) -> std::result::Result<NaiveDateTime, InputError> {
    let text = raw.trim();
    if !has_four_digit_year(text) {
        return Err(InputError::InvalidDate);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return Ok(dt);
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    ISO_FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .ok_or(InputError::InvalidDate)
}

/// Line-oriented prompt loop over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes `prompt` and returns the next line as read, terminator included.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AgendaError::InputClosed);
        }
        Ok(line)
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i32> {
        self.read_parsed(prompt, parse_int)
    }

    pub fn read_text(&mut self, prompt: &str) -> Result<String> {
        self.read_parsed(prompt, parse_text)
    }

    pub fn read_datetime(&mut self, prompt: &str) -> Result<NaiveDateTime> {
        self.read_parsed(prompt, parse_datetime)
    }

    fn read_parsed<T, F>(&mut self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, InputError>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!("rejected input {:?}: {:?}", line.trim_end(), err);
                    writeln!(self.output, "{}", err)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::at;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn parse_int_accepts_trimmed_numbers() {
        assert_eq!(parse_int("10"), Ok(10));
        assert_eq!(parse_int("  -42 \r\n"), Ok(-42));
        assert_eq!(parse_int("+7"), Ok(7));
    }

    #[test]
    fn parse_int_rejects_garbage_and_overflow() {
        assert_eq!(parse_int("abc"), Err(InputError::NotANumber));
        assert_eq!(parse_int(""), Err(InputError::NotANumber));
        assert_eq!(parse_int("1.5"), Err(InputError::NotANumber));
        assert_eq!(parse_int("2147483648"), Err(InputError::OutOfRange));
        assert_eq!(parse_int("-2147483649"), Err(InputError::OutOfRange));
        assert_eq!(parse_int("2147483647"), Ok(i32::MAX));
    }

    #[test]
    fn parse_text_trims_and_rejects_blank() {
        assert_eq!(parse_text("  Ana María \n"), Ok("Ana María".to_string()));
        assert_eq!(parse_text("   \t\n"), Err(InputError::Empty));
        assert_eq!(parse_text(""), Err(InputError::Empty));
    }

    #[test]
    fn parse_datetime_accepts_every_listed_pattern() {
        let expected = at(2025, 10, 15, 14, 30);
        for input in [
            "2025-10-15 14:30",
            "2025/10/15 14:30",
            "15/10/2025 14:30",
            "15-10-2025 14:30",
            " 2025-10-15 14:30 \n",
        ] {
            assert_eq!(parse_datetime(input), Ok(expected), "input {:?}", input);
        }
    }

    #[test]
    fn date_only_means_midnight() {
        let midnight = at(2025, 10, 15, 0, 0);
        assert_eq!(parse_datetime("15/10/2025"), Ok(midnight));
        assert_eq!(parse_datetime("2025-10-15"), Ok(midnight));
        assert_eq!(parse_datetime("15-10-2025"), Ok(midnight));
    }

    #[test]
    fn iso_fallback_formats() {
        assert_eq!(parse_datetime("2025-10-15T14:30"), Ok(at(2025, 10, 15, 14, 30)));
        assert_eq!(
            parse_datetime("2025-10-15 14:30:00"),
            Ok(at(2025, 10, 15, 14, 30))
        );
    }

    #[test]
    fn past_dates_are_accepted() {
        assert_eq!(parse_datetime("1999-01-02 03:04"), Ok(at(1999, 1, 2, 3, 4)));
    }

    #[test]
    fn parse_datetime_rejects_nonsense() {
        assert_eq!(parse_datetime("mañana"), Err(InputError::InvalidDate));
        assert_eq!(parse_datetime("2025-13-40 10:00"), Err(InputError::InvalidDate));
        assert_eq!(parse_datetime("15/10/2025 25:00"), Err(InputError::InvalidDate));
        assert_eq!(parse_datetime(""), Err(InputError::InvalidDate));
    }

    #[test]
    fn year_must_have_four_digits() {
        assert_eq!(parse_datetime("15/10/25"), Err(InputError::InvalidDate));
        assert_eq!(parse_datetime("15/10/25 14:30"), Err(InputError::InvalidDate));
        assert_eq!(parse_datetime("25-10-15"), Err(InputError::InvalidDate));
        assert_eq!(parse_datetime("02025-10-15"), Err(InputError::InvalidDate));
    }

    #[test]
    fn signed_years_are_rejected() {
        assert_eq!(parse_datetime("+2025-10-15 14:30"), Err(InputError::InvalidDate));
        assert_eq!(parse_datetime("-2025-10-15"), Err(InputError::InvalidDate));
    }

    #[test]
    fn single_digit_day_and_month_still_parse() {
        assert_eq!(parse_datetime("5/3/2025 09:15"), Ok(at(2025, 3, 5, 9, 15)));
    }

    #[test]
    fn read_int_retries_until_valid() {
        let mut p = prompter("abc\n99999999999\n10\n");
        assert_eq!(p.read_int("Id: ").unwrap(), 10);

        let out = written(p);
        assert_eq!(out.matches("Id: ").count(), 3);
        assert!(out.contains("Entrada inválida. Ingrese un número entero (ej.: 10)."));
        assert!(out.contains("Número fuera de rango para int."));
    }

    #[test]
    fn read_text_retries_on_blank() {
        let mut p = prompter("\n   \n Ana \n");
        assert_eq!(p.read_text("Nombre: ").unwrap(), "Ana");
        assert_eq!(written(p).matches("El campo no puede estar vacío.").count(), 2);
    }

    #[test]
    fn read_datetime_retries_with_examples() {
        let mut p = prompter("ayer\n15/10/2025\n");
        assert_eq!(p.read_datetime("Fecha: ").unwrap(), at(2025, 10, 15, 0, 0));
        assert!(written(p).contains("Ejemplos: 2025-10-15 14:30 | 15/10/2025 14:30"));
    }

    #[test]
    fn end_of_input_is_reported() {
        let mut p = prompter("abc\n");
        assert!(matches!(p.read_int("Id: "), Err(AgendaError::InputClosed)));
    }
}
