//! Loading network records.
//!
//! The canonical record format is one segment per line:
//!
//! ```text
//! <line> <from> <to> <distance>km
//! ```
//!
//! Lines that don't fit the format are skipped. [`normalize`] turns a raw,
//! human-edited line listing into this format.

mod normalize;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

pub use normalize::{normalize, normalize_file};

use crate::domain::{Distance, DomainError, LineName, StationName};

/// Unit suffix stripped from the distance field.
const DISTANCE_SUFFIX: &str = "km";

/// One physical segment between two stations on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub line: LineName,
    pub from: StationName,
    pub to: StationName,
    pub distance: Distance,
}

impl Record {
    /// Create a record from raw parts.
    pub fn new(line: &str, from: &str, to: &str, distance_km: f64) -> Result<Self, RecordError> {
        Ok(Self {
            line: LineName::new(line)?,
            from: StationName::new(from)?,
            to: StationName::new(to)?,
            distance: Distance::from_km(distance_km)?,
        })
    }
}

/// Why a single record line was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// Not exactly four whitespace-separated fields
    #[error("expected 4 fields, found {0}")]
    FieldCount(usize),

    /// Distance field isn't a number
    #[error("invalid distance field: {0:?}")]
    InvalidDistance(String),

    /// A name or distance failed domain validation
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Errors that abort loading entirely.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the input failed
    #[error("failed to read network data: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse one record line.
pub fn parse_record(text: &str) -> Result<Record, RecordError> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let [line, from, to, distance] = fields[..] else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    let number = distance.strip_suffix(DISTANCE_SUFFIX).unwrap_or(distance);
    let km: f64 = number
        .parse()
        .map_err(|_| RecordError::InvalidDistance(distance.to_string()))?;

    Record::new(line, from, to, km)
}

/// Feed each line of `reader` that decodes as UTF-8 to `visit`, with its
/// 1-based line number.
///
/// Undecodable lines are logged and skipped. Returns how many were skipped.
fn for_each_utf8_line(reader: impl Read, mut visit: impl FnMut(usize, &str)) -> io::Result<usize> {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut line_no = 0usize;
    let mut undecodable = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        match std::str::from_utf8(&buf) {
            Ok(line) => visit(line_no, line.trim_end_matches(['\n', '\r'])),
            Err(e) => {
                undecodable += 1;
                debug!(line_no, error = %e, "Skipping line that is not valid UTF-8");
            }
        }
    }

    Ok(undecodable)
}

/// Read records from a reader, skipping blank and malformed lines.
///
/// # Errors
///
/// Only I/O failures are fatal; a bad line, including one that isn't valid
/// UTF-8, is logged and skipped.
pub fn load_records(reader: impl Read) -> Result<Vec<Record>, LoadError> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    let undecodable = for_each_utf8_line(reader, |line_no, line| {
        if line.trim().is_empty() {
            return;
        }
        match parse_record(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                skipped += 1;
                debug!(line_no, error = %e, "Skipping malformed record");
            }
        }
    })?;
    skipped += undecodable;

    info!(records = records.len(), skipped, "Loaded network records");
    Ok(records)
}

/// Read records from a file.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let file = File::open(path.as_ref())?;
    load_records(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_valid_record() {
        let record = parse_record("L1 A B 3.5km").unwrap();
        assert_eq!(record.line.as_str(), "L1");
        assert_eq!(record.from.as_str(), "A");
        assert_eq!(record.to.as_str(), "B");
        assert_eq!(record.distance.km(), 3.5);
    }

    #[test]
    fn parse_without_suffix() {
        assert_eq!(parse_record("L1 A B 2").unwrap().distance.km(), 2.0);
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let record = parse_record("  L1\tA   B 1km  ").unwrap();
        assert_eq!(record.to.as_str(), "B");
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(parse_record("L1 A B"), Err(RecordError::FieldCount(3)));
        assert_eq!(
            parse_record("L1 A B 1km extra"),
            Err(RecordError::FieldCount(5))
        );
        assert_eq!(parse_record(""), Err(RecordError::FieldCount(0)));
    }

    #[test]
    fn non_numeric_distance() {
        assert_eq!(
            parse_record("L1 A B farkm"),
            Err(RecordError::InvalidDistance("farkm".into()))
        );
    }

    #[test]
    fn negative_distance() {
        assert!(matches!(
            parse_record("L1 A B -1km"),
            Err(RecordError::Domain(DomainError::InvalidDistance(_)))
        ));
    }

    #[test]
    fn load_skips_noise() {
        let input = "L1 A B 3km\n\nnot a record\nL1 B C 5km\nL2 B D xkm\n";
        let records = load_records(input.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].from.as_str(), "B");
        assert_eq!(records[1].to.as_str(), "C");
    }

    #[test]
    fn load_skips_undecodable_line() {
        let input: &[u8] = b"L1 A B 3km\nL1 \xff\xfe C 1km\nL1 B C 5km\n";
        let records = load_records(input).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].to.as_str(), "B");
        assert_eq!(records[1].to.as_str(), "C");
    }

    #[test]
    fn load_handles_crlf_and_missing_final_newline() {
        let records = load_records("L1 A B 3km\r\nL1 B C 5km".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].distance.km(), 5.0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2号线 汉口火车站 范湖 1.2km").unwrap();
        writeln!(file, "2号线 范湖 王家墩东 0.9km").unwrap();

        let records = load_file(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].from.as_str(), "汉口火车站");
        assert_eq!(records[1].distance.km(), 0.9);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_file(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
