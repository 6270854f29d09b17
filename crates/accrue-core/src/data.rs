// File: crates/accrue-core/src/data.rs
// Summary: Record model and CSV loading (Date + accumulate columns), sorted by date.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::LoadError;

/// Input format of the `Date` column.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

const DATE_COLUMN: &str = "Date";
const VALUE_COLUMN: &str = "accumulate";

/// One row of the series: a calendar date and its cumulative value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub date: NaiveDate,
    pub accumulate: f64,
}

impl Record {
    pub const fn new(date: NaiveDate, accumulate: f64) -> Self {
        Self { date, accumulate }
    }

    /// Parse raw CSV fields. Returns `None` when either field is unusable,
    /// including non-finite numbers.
    pub fn parse(date: &str, accumulate: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
        let accumulate = accumulate.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Self { date, accumulate })
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    accumulate: String,
}

/// Where a chart build gets its records from. Called once per build.
pub trait DataSource {
    fn load(&self) -> Result<Vec<Record>, LoadError>;
}

/// CSV file on disk.
#[derive(Clone, Debug)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for CsvFile {
    fn load(&self) -> Result<Vec<Record>, LoadError> {
        load_csv(&self.path)
    }
}

impl DataSource for Vec<Record> {
    fn load(&self) -> Result<Vec<Record>, LoadError> {
        let mut records = self.clone();
        sort_by_date(&mut records);
        Ok(records)
    }
}

/// Load and sort records from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<Record>, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading series");
    let rdr = reader_builder()
        .from_path(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    read_records(rdr)
}

/// Load and sort records from any CSV byte stream.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    read_records(reader_builder().from_reader(reader))
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true).trim(csv::Trim::All);
    builder
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Record>, LoadError> {
    let headers = rdr.headers()?.clone();
    for column in [DATE_COLUMN, VALUE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
        // header is line 1
        let line = i + 2;
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_io_error() => return Err(err.into()),
            Err(err) => {
                warn!(line, %err, "skipping unreadable row");
                skipped += 1;
                continue;
            }
        };
        match Record::parse(&row.date, &row.accumulate) {
            Some(record) => out.push(record),
            None => {
                warn!(line, date = %row.date, accumulate = %row.accumulate, "skipping row with unparsable field");
                skipped += 1;
            }
        }
    }

    sort_by_date(&mut out);
    info!(records = out.len(), skipped, "loaded accumulation series");
    Ok(out)
}

/// Stable ascending sort by date.
pub fn sort_by_date(records: &mut [Record]) {
    records.sort_by_key(|r| r.date);
}

/// Minimum and maximum `accumulate` over `records`, or `None` when empty.
pub fn value_extent(records: &[Record]) -> Option<(f64, f64)> {
    let first = records.first()?.accumulate;
    Some(records.iter().fold((first, first), |(lo, hi), r| (lo.min(r.accumulate), hi.max(r.accumulate))))
}
