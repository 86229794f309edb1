use std::path::Path;

use csv::StringRecord;

use crate::config::SourceOptions;
use crate::core::record::Record;
use crate::core::types::Source;
use crate::parsing::delimited::{self, ParseError};

/// Parse a disease file with rows `*, *, *, birth_year, gender, postal_code, disease`
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if a row is malformed.
pub fn parse_disease_file(
    path: &Path,
    options: &SourceOptions,
) -> Result<Vec<Record>, ParseError> {
    delimited::parse_file(path, Source::Disease, options)
}

/// Parse disease rows from text
///
/// # Errors
///
/// Returns `ParseError::FieldCount` if a row does not have seven fields.
pub fn parse_disease_text(text: &str, options: &SourceOptions) -> Result<Vec<Record>, ParseError> {
    delimited::parse_text(text, Source::Disease, options)
}

/// Build a disease record from a row already known to have seven fields.
/// The first three (suppressed identity columns) are ignored.
pub(crate) fn record_from_row(row: &StringRecord) -> Record {
    Record::disease(&row[3], &row[4], &row[5], &row[6])
}
