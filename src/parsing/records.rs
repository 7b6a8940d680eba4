//! Parser for delimited catalog files.
//!
//! Each non-blank line holds one record:
//!
//! ```text
//! library;author;title;reservations
//! ```
//!
//! The delimiter is chosen per line: `;` if the line contains one, otherwise
//! `,`. A line with neither aborts parsing. `reservations` is a non-negative
//! integer or the token `on-the-shelf`, which means zero.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::utils::validation::{check_record_limit, is_gzipped};

/// Token accepted in place of a reservation count of zero
pub const ON_THE_SHELF: &str = "on-the-shelf";

/// Fields every record must carry
const FIELD_COUNT: usize = 4;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown delimiter on line {line}")]
    UnknownDelimiter { line: usize },

    #[error("empty field on line {line}")]
    EmptyField { line: usize },

    #[error("invalid reservation count on line {line}: '{value}'")]
    InvalidReservations { line: usize, value: String },

    #[error("Too many records: {0} exceeds maximum allowed")]
    TooManyRecords(usize),
}

/// One parsed line of a catalog file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub library: String,
    pub author: String,
    pub title: String,
    pub reservations: u32,
}

/// Pick the field delimiter for a single line
#[must_use]
pub fn detect_delimiter(line: &str) -> Option<char> {
    if line.contains(';') {
        Some(';')
    } else if line.contains(',') {
        Some(',')
    } else {
        None
    }
}

/// Parse one line into a record. `line_num` is 1-based and only used in errors.
///
/// # Errors
///
/// Returns `RecordError::UnknownDelimiter` if the line has neither `;` nor `,`,
/// `RecordError::EmptyField` if any of the four fields is empty or missing, or
/// `RecordError::InvalidReservations` if the count is not a number.
pub fn parse_record(line: &str, line_num: usize) -> Result<Record, RecordError> {
    let delimiter =
        detect_delimiter(line).ok_or(RecordError::UnknownDelimiter { line: line_num })?;

    // Anything after the fourth field is ignored
    let fields: Vec<&str> = line.splitn(FIELD_COUNT + 1, delimiter).collect();

    let library = required_field(&fields, 0, line_num)?;
    let author = required_field(&fields, 1, line_num)?;
    let title = required_field(&fields, 2, line_num)?;
    let reservations = parse_reservations(required_field(&fields, 3, line_num)?, line_num)?;

    Ok(Record {
        library: library.to_string(),
        author: author.to_string(),
        title: title.to_string(),
        reservations,
    })
}

fn required_field<'a>(
    fields: &[&'a str],
    index: usize,
    line_num: usize,
) -> Result<&'a str, RecordError> {
    match fields.get(index) {
        Some(&f) if !f.is_empty() => Ok(f),
        _ => Err(RecordError::EmptyField { line: line_num }),
    }
}

fn parse_reservations(value: &str, line_num: usize) -> Result<u32, RecordError> {
    if value == ON_THE_SHELF {
        return Ok(0);
    }
    value
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidReservations {
            line: line_num,
            value: value.to_string(),
        })
}

/// Parse records from any buffered reader.
///
/// Blank lines are skipped and a trailing `\r` is removed before parsing, so
/// files written on Windows load unchanged.
///
/// # Errors
///
/// Returns the first `RecordError` encountered; nothing is returned for a
/// partially valid input.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>, RecordError> {
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.trim().is_empty() {
            continue;
        }

        if check_record_limit(records.len()).is_some() {
            return Err(RecordError::TooManyRecords(records.len()));
        }

        // Line numbers in errors are 1-based for user friendliness
        records.push(parse_record(line, i + 1)?);
    }

    debug!("Parsed {} records", records.len());
    Ok(records)
}

/// Parse records from text already in memory
///
/// # Errors
///
/// See [`parse_records`].
pub fn parse_records_text(text: &str) -> Result<Vec<Record>, RecordError> {
    parse_records(text.as_bytes())
}

/// Parse a catalog file, decompressing it first if it ends in `.gz`
///
/// # Errors
///
/// Returns `RecordError::Io` if the file cannot be opened or read, or any
/// other error from [`parse_records`].
pub fn parse_records_file(path: &Path) -> Result<Vec<Record>, RecordError> {
    let file = File::open(path)?;
    if is_gzipped(path) {
        parse_records(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_records(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a;b,c;d"), Some(';'));
        assert_eq!(detect_delimiter("a,b,c,d"), Some(','));
        assert_eq!(detect_delimiter("a b c d"), None);
    }

    #[test]
    fn test_parse_record() {
        let record = parse_record("Metso;Tove Jansson;Comet in Moominland;3", 1).unwrap();
        assert_eq!(record.library, "Metso");
        assert_eq!(record.author, "Tove Jansson");
        assert_eq!(record.title, "Comet in Moominland");
        assert_eq!(record.reservations, 3);
    }

    #[test]
    fn test_parse_on_the_shelf() {
        let record = parse_record("Metso,Tove Jansson,Moomin,on-the-shelf", 1).unwrap();
        assert_eq!(record.reservations, 0);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record = parse_record("Metso;Jansson;Moomin;4;extra;more", 1).unwrap();
        assert_eq!(record.reservations, 4);
    }

    #[test]
    fn test_comma_inside_semicolon_line_is_kept() {
        let record = parse_record("Metso;Jansson, Tove;Moomin, vol 1;0", 1).unwrap();
        assert_eq!(record.author, "Jansson, Tove");
        assert_eq!(record.title, "Moomin, vol 1");
    }

    #[test]
    fn test_missing_field() {
        assert!(matches!(
            parse_record("Metso;Jansson;Moomin", 7),
            Err(RecordError::EmptyField { line: 7 })
        ));
        assert!(matches!(
            parse_record("Metso;;Moomin;1", 2),
            Err(RecordError::EmptyField { line: 2 })
        ));
        assert!(matches!(
            parse_record("Metso;Jansson;Moomin;", 3),
            Err(RecordError::EmptyField { line: 3 })
        ));
    }

    #[test]
    fn test_unknown_delimiter() {
        assert!(matches!(
            parse_record("Metso Jansson Moomin 1", 4),
            Err(RecordError::UnknownDelimiter { line: 4 })
        ));
    }

    #[test]
    fn test_invalid_reservations() {
        assert!(matches!(
            parse_record("Metso;Jansson;Moomin;many", 1),
            Err(RecordError::InvalidReservations { .. })
        ));
        assert!(matches!(
            parse_record("Metso;Jansson;Moomin;-1", 1),
            Err(RecordError::InvalidReservations { .. })
        ));
    }

    #[test]
    fn test_mixed_delimiters_accepted_per_line() {
        let text = "A;Bob;Book1;0\nB,Bob,Book1,2\nA;Ann;Book3;on-the-shelf\n";
        let records = parse_records_text(text).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].library, "B");
        assert_eq!(records[1].reservations, 2);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let text = "A;Bob;Book1;0\r\n\r\n\nA;Bob;Book2;3\r\n";
        let records = parse_records_text(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].reservations, 3);
    }

    #[test]
    fn test_error_reports_file_line() {
        let text = "A;Bob;Book1;0\n\nA;Bob;Book2\n";
        assert!(matches!(
            parse_records_text(text),
            Err(RecordError::EmptyField { line: 3 })
        ));
    }

    #[test]
    fn test_too_many_records() {
        use crate::utils::validation::MAX_RECORDS;

        let text = "A;B;C;0\n".repeat(MAX_RECORDS + 1);
        assert!(matches!(
            parse_records_text(&text),
            Err(RecordError::TooManyRecords(n)) if n == MAX_RECORDS
        ));
    }

    #[test]
    fn test_parse_records_file() {
        let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
        temp.write_all(b"A;Bob;Book1;0\nA;Bob;Book2;3\n").unwrap();
        temp.flush().unwrap();

        let records = parse_records_file(temp.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_records_gzipped_file() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"A,Bob,Book1,0\n").unwrap();
        let compressed = encoder.finish().unwrap();

        let mut temp = NamedTempFile::with_suffix(".csv.gz").unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let records = parse_records_file(temp.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Book1");
    }

    #[test]
    fn test_missing_file() {
        let result = parse_records_file(Path::new("/nonexistent/libraries.csv"));
        assert!(matches!(result, Err(RecordError::Io(_))));
    }
}
