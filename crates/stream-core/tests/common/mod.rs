// File: crates/stream-core/tests/common/mod.rs
// Purpose: Row builders shared by the integration tests.

#![allow(dead_code)]

use stream_core::{RawRecord, Series};

/// Raw row with a date and one value per series, in enumeration order.
pub fn row(date: &str, values: [f64; 5]) -> RawRecord {
    let mut r = RawRecord::new();
    r.insert("Date".to_string(), date.to_string());
    for (s, v) in Series::ALL.into_iter().zip(values) {
        r.insert(s.column().to_string(), v.to_string());
    }
    r
}

/// Raw row from literal cells.
pub fn raw(cells: &[(&str, &str)]) -> RawRecord {
    cells.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// The two-month GPT-4 / Gemini scenario.
pub fn two_months() -> Vec<RawRecord> {
    vec![
        row("01/01/24", [10.0, 5.0, 0.0, 0.0, 0.0]),
        row("02/01/24", [20.0, 15.0, 0.0, 0.0, 0.0]),
    ]
}

/// A few months of irregular rows, unsorted on purpose.
pub fn irregular() -> Vec<RawRecord> {
    vec![
        row("03/14/24", [12.0, 7.0, 3.0, 9.0, 1.0]),
        row("01/02/24", [4.0, 2.0, 8.0, 1.0, 0.0]),
        row("01/20/24", [6.0, 3.5, 2.0, 4.0, 2.5]),
        row("02/11/24", [9.0, 11.0, 0.0, 6.0, 3.0]),
        row("03/30/24", [15.0, 6.0, 4.0, 12.0, 5.0]),
        row("04/05/24", [7.0, 9.0, 1.5, 14.0, 8.0]),
    ]
}
