use std::io::{Read, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::config::SourceOptions;
use crate::core::record::Record;
use crate::core::types::Source;
use crate::parsing::{disease, poll};
use crate::utils::validation::{record_limit_reached, MAX_RECORDS};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed delimited input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: a {kind} row needs {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        kind: Source,
        expected: usize,
        found: usize,
    },

    #[error("Line {line}: birth date '{value}' does not split into day, month and year")]
    InvalidBirthDate { line: u64, value: String },

    #[error("Delimiter {0:?} is not a single-byte ASCII character")]
    InvalidDelimiter(char),

    #[error("Too many records: input exceeds maximum allowed ({0})")]
    TooManyRecords(usize),
}

fn delimiter_byte(delimiter: char) -> Result<u8, ParseError> {
    if delimiter.is_ascii() {
        Ok(delimiter as u8)
    } else {
        Err(ParseError::InvalidDelimiter(delimiter))
    }
}

/// Parse a delimited file of `kind` rows
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any error from
/// [`parse_reader`].
pub fn parse_file(path: &Path, kind: Source, options: &SourceOptions) -> Result<Vec<Record>, ParseError> {
    let file = std::fs::File::open(path)?;
    let records = parse_reader(file, kind, options)?;
    info!(
        "Parsed {} {kind} records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse delimited text of `kind` rows
///
/// # Errors
///
/// See [`parse_reader`].
pub fn parse_text(text: &str, kind: Source, options: &SourceOptions) -> Result<Vec<Record>, ParseError> {
    parse_reader(text.as_bytes(), kind, options)
}

/// Read every row from `reader` and build one record per row.
///
/// Rows are never partially admitted: the first malformed row aborts the
/// whole read.
///
/// # Errors
///
/// Returns `ParseError::FieldCount` for a row of the wrong width,
/// `ParseError::InvalidBirthDate` for an undecomposable poll date,
/// `ParseError::Csv` for format errors, or `ParseError::TooManyRecords`
/// if the input holds more than [`MAX_RECORDS`] rows.
pub fn parse_reader<R: Read>(
    reader: R,
    kind: Source,
    options: &SourceOptions,
) -> Result<Vec<Record>, ParseError> {
    parse_reader_with_limit(reader, kind, options, MAX_RECORDS)
}

/// [`parse_reader`] with an explicit cap on the number of rows.
///
/// # Errors
///
/// As [`parse_reader`], with `ParseError::TooManyRecords(limit)` once a row
/// past `limit` is read.
pub fn parse_reader_with_limit<R: Read>(
    reader: R,
    kind: Source,
    options: &SourceOptions,
    limit: usize,
) -> Result<Vec<Record>, ParseError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter_byte(options.delimiter)?)
        .has_headers(options.has_headers)
        .trim(if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        // Width is checked per row so the error names the layout
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);

        if row.len() != kind.field_count() {
            return Err(ParseError::FieldCount {
                line,
                kind,
                expected: kind.field_count(),
                found: row.len(),
            });
        }

        if record_limit_reached(records.len(), limit) {
            return Err(ParseError::TooManyRecords(limit));
        }

        let record = match kind {
            Source::Poll => poll::record_from_row(&row, line)?,
            Source::Disease => disease::record_from_row(&row),
        };
        debug!("{record}");
        records.push(record);
    }

    Ok(records)
}

/// Write re-identified records as `name, telephone, birth_year, gender,
/// postal_code, disease` rows with no header.
///
/// Absent values are written as empty fields. Fields are only quoted when
/// they contain the delimiter, a quote or a line break.
///
/// # Errors
///
/// Returns `ParseError::InvalidDelimiter` for a non-ASCII delimiter, or
/// `ParseError::Csv` if writing fails.
pub fn write_records<W: Write>(
    writer: W,
    records: &[Record],
    delimiter: char,
) -> Result<(), ParseError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter_byte(delimiter)?)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    for record in records {
        csv_writer.write_record([
            record.name.as_deref().unwrap_or_default(),
            record.telephone.as_deref().unwrap_or_default(),
            record.birth_year.as_deref().unwrap_or_default(),
            record.gender.as_deref().unwrap_or_default(),
            record.postal_code.as_deref().unwrap_or_default(),
            record.disease.as_deref().unwrap_or_default(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Write records with all eight attributes, in declaration order, no header
///
/// # Errors
///
/// Returns `ParseError::InvalidDelimiter` for a non-ASCII delimiter, or
/// `ParseError::Csv` if writing fails.
pub fn write_all_fields<W: Write>(
    writer: W,
    records: &[Record],
    delimiter: char,
) -> Result<(), ParseError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter_byte(delimiter)?)
        .from_writer(writer);

    for record in records {
        csv_writer.write_record(
            [
                &record.name,
                &record.telephone,
                &record.birth_day,
                &record.birth_month,
                &record.birth_year,
                &record.gender,
                &record.postal_code,
                &record.disease,
            ]
            .map(|field| field.as_deref().unwrap_or_default()),
        )?;
    }
    csv_writer.flush()?;

    Ok(())
}
