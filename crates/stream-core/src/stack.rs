// File: crates/stream-core/src/stack.rs
// Summary: Silhouette (zero-centered) stack layout for the streamgraph.

use chrono::NaiveDate;

use crate::record::Record;
use crate::series::{Series, SeriesMap};

/// One band edge pair at one row.
/// Contract: `high - low` equals the series value at that row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackPoint {
    pub timestamp: Option<NaiveDate>,
    pub low: f64,
    pub high: f64,
}

impl StackPoint {
    pub fn height(&self) -> f64 {
        self.high - self.low
    }
}

/// The band drawn for a single series, one point per input record in record order.
#[derive(Clone, Debug, PartialEq)]
pub struct StackedLayer {
    pub series: Series,
    pub points: Vec<StackPoint>,
}

impl StackedLayer {
    fn with_capacity(series: Series, n: usize) -> Self {
        Self { series, points: Vec::with_capacity(n) }
    }
}

/// Stack `records` in `order`, centering every row on zero.
///
/// For each row the running sums `c_0 = 0, c_i = c_{i-1} + v_i` are shifted down by
/// half the row total, so layer `i` spans `[c_{i-1} - T/2, c_i - T/2]`. The offset is
/// per row. No division by a data value happens, so all-zero rows stay finite.
pub fn layout(records: &[Record], order: &[Series; 5]) -> SeriesMap<StackedLayer> {
    let mut layers = SeriesMap::from_fn(|s| StackedLayer::with_capacity(s, records.len()));

    for rec in records {
        let total: f64 = order.iter().map(|&s| rec.values[s]).sum();
        let offset = total / 2.0;
        let mut cum = 0.0f64;
        for &s in order {
            let low = cum - offset;
            cum += rec.values[s];
            layers[s].points.push(StackPoint { timestamp: rec.timestamp, low, high: cum - offset });
        }
    }
    layers
}

/// Stack in the enumeration's own order.
pub fn layout_default(records: &[Record]) -> SeriesMap<StackedLayer> {
    layout(records, &Series::ALL)
}

/// Smallest `low` and largest `high` over every layer, skipping NaN edges.
/// `None` when no finite edge exists.
pub fn value_extent(layers: &SeriesMap<StackedLayer>) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for layer in layers.values() {
        for p in &layer.points {
            if !p.low.is_nan() { lo = lo.min(p.low); }
            if !p.high.is_nan() { hi = hi.max(p.high); }
        }
    }
    if lo.is_finite() && hi.is_finite() { Some((lo, hi)) } else { None }
}
