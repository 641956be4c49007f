// File: crates/stream-core/src/record.rs
// Summary: Normalizer turning raw string-keyed rows into typed records.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::series::{Series, SeriesMap, DATE_COLUMN};

/// Column name -> raw cell text, as produced by the row parser.
pub type RawRecord = BTreeMap<String, String>;

/// Input date layout (`01/31/24`).
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// One typed row.
/// Contract: `timestamp` is `None` when the raw date did not parse; such rows are
/// carried through the pipeline and end up as unplotted geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub timestamp: Option<NaiveDate>,
    pub values: SeriesMap<f64>,
}

impl Record {
    pub fn new(timestamp: Option<NaiveDate>, values: SeriesMap<f64>) -> Self {
        Self { timestamp, values }
    }

    /// Sum of all series values at this row.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}

/// Parse a `MM/DD/YY` date. Two-digit years 70..=99 land in the 1900s, the rest in the 2000s.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Coerce a numeric cell.
/// Missing and blank cells count as zero; anything else that fails to parse is NaN.
pub fn coerce_number(raw: Option<&str>) -> f64 {
    match raw.map(str::trim) {
        None | Some("") => 0.0,
        Some(s) => s.parse::<f64>().unwrap_or(f64::NAN),
    }
}

pub fn normalize_one(raw: &RawRecord) -> Record {
    let timestamp = raw.get(DATE_COLUMN).and_then(|d| parse_date(d));
    let values = SeriesMap::from_fn(|s: Series| coerce_number(raw.get(s.column()).map(String::as_str)));
    Record { timestamp, values }
}

/// Normalize every row, preserving order and length. Never drops a row.
pub fn normalize(rows: &[RawRecord]) -> Vec<Record> {
    let records: Vec<Record> = rows.iter().map(normalize_one).collect();

    let bad_dates = records.iter().filter(|r| r.timestamp.is_none()).count();
    let nan_cells = records
        .iter()
        .flat_map(|r| r.values.values())
        .filter(|v| v.is_nan())
        .count();
    if bad_dates > 0 || nan_cells > 0 {
        tracing::warn!(bad_dates, nan_cells, rows = records.len(), "dataset carries unparsable cells");
    }
    records
}
