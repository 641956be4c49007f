// File: crates/stream-core/src/aggregate.rs
// Summary: Calendar-month aggregation of typed records.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;

use crate::record::Record;
use crate::series::{Series, SeriesMap};

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Per-month totals for every series.
/// `month_start` is `None` for the bucket collecting rows whose date did not parse.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthBucket {
    pub month_start: Option<NaiveDate>,
    pub totals: SeriesMap<f64>,
}

impl MonthBucket {
    fn empty(month_start: Option<NaiveDate>) -> Self {
        Self { month_start, totals: SeriesMap::default() }
    }

    /// Short calendar month name (`Jan`), `Invalid` for the undated bucket.
    pub fn label(&self) -> &'static str {
        self.month_start.map_or("Invalid", short_month_name)
    }

    pub fn total(&self, series: Series) -> f64 {
        self.totals[series]
    }
}

/// Truncate a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn short_month_name(date: NaiveDate) -> &'static str {
    MONTH_ABBREV[date.month0() as usize]
}

/// Group records by month and sum each series.
///
/// Buckets come out in the order their month is first seen in `records`, which is
/// not calendar order when the input is unsorted. Sums are plain float addition,
/// so a NaN cell turns that bucket's total NaN.
pub fn aggregate_by_month(records: &[Record]) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = Vec::new();
    let mut index: FxHashMap<Option<NaiveDate>, usize> = FxHashMap::default();

    for rec in records {
        let key = rec.timestamp.map(month_start);
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(MonthBucket::empty(key));
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];
        for (series, value) in rec.values.iter() {
            bucket.totals[series] += *value;
        }
    }

    tracing::debug!(records = records.len(), buckets = buckets.len(), "aggregated by month");
    buckets
}
