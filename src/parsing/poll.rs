use std::path::Path;

use csv::StringRecord;

use crate::config::SourceOptions;
use crate::core::record::Record;
use crate::core::types::Source;
use crate::parsing::delimited::{self, ParseError};
use crate::utils::validation::split_birth_date;

/// Parse a poll file with rows `name, telephone, DD-MM-YYYY, gender, postal_code`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if a row is malformed.
pub fn parse_poll_file(path: &Path, options: &SourceOptions) -> Result<Vec<Record>, ParseError> {
    delimited::parse_file(path, Source::Poll, options)
}

/// Parse poll rows from text
///
/// # Errors
///
/// Returns `ParseError::FieldCount` or `ParseError::InvalidBirthDate` for
/// malformed rows.
pub fn parse_poll_text(text: &str, options: &SourceOptions) -> Result<Vec<Record>, ParseError> {
    delimited::parse_text(text, Source::Poll, options)
}

/// Build a poll record from a row already known to have five fields.
///
/// The birth date is decomposed by its numeric runs, in day, month, year order.
pub(crate) fn record_from_row(row: &StringRecord, line: u64) -> Result<Record, ParseError> {
    let date = &row[2];
    let (day, month, year) =
        split_birth_date(date).ok_or_else(|| ParseError::InvalidBirthDate {
            line,
            value: date.to_string(),
        })?;

    Ok(Record::poll(&row[0], &row[1], day, month, year, &row[3], &row[4]))
}
