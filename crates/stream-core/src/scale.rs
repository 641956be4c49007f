// File: crates/stream-core/src/scale.rs
// Summary: Time (X), linear value (Y) and band (X) scale transforms, plus the two
// independent scale sets for the main chart and the drill-down chart.

use chrono::{Datelike, NaiveDate};

use crate::chart::RenderOptions;
use crate::interaction::MonthValue;
use crate::record::Record;
use crate::series::SeriesMap;
use crate::stack::{value_extent, StackedLayer};
use crate::types::Insets;

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Map `v` from `[d0, d1]` onto `[r0, r1]`. A zero-span domain maps to the range midpoint.
#[inline]
fn interpolate(v: f64, d0: f64, d1: f64, r0: f32, r1: f32) -> f32 {
    let span = d1 - d0;
    let t = if span != 0.0 {
        (v - d0) / span
    } else if span.is_nan() {
        f64::NAN
    } else {
        0.5
    };
    r0 + (t as f32) * (r1 - r0)
}

#[inline]
fn day_number(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Horizontal calendar scale. The domain is stored as day numbers so that an empty
/// domain (no parseable dates) can be represented as NaN and yields NaN positions.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub d0: f64,
    pub d1: f64,
    pub left_px: f32,
    pub right_px: f32,
}

impl TimeScale {
    pub fn new(domain: Option<(NaiveDate, NaiveDate)>, left_px: f32, right_px: f32) -> Self {
        let (d0, d1) = domain.map_or((f64::NAN, f64::NAN), |(a, b)| (day_number(a), day_number(b)));
        Self { d0, d1, left_px, right_px }
    }

    /// Extent of the valid timestamps in `records`, ignoring unparsed dates.
    pub fn extent(records: &[Record]) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = records.iter().filter_map(|r| r.timestamp);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    pub fn domain(&self) -> Option<(NaiveDate, NaiveDate)> {
        if self.d0.is_nan() || self.d1.is_nan() {
            return None;
        }
        let a = NaiveDate::from_num_days_from_ce_opt(self.d0 as i32)?;
        let b = NaiveDate::from_num_days_from_ce_opt(self.d1 as i32)?;
        Some((a, b))
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 {
        interpolate(day_number(date), self.d0, self.d1, self.left_px, self.right_px)
    }

    /// Position of an optional timestamp; unparsed dates map to NaN.
    #[inline]
    pub fn to_px_opt(&self, date: Option<NaiveDate>) -> f32 {
        date.map_or(f32::NAN, |d| self.to_px(d))
    }

    /// Month-boundary ticks inside the domain.
    ///
    /// The step is whichever of 1 month, 3 months or 1 year lies closest (by ratio) to
    /// the span divided by `count`; longer spans step by a 1/2/5 x 10^k number of years.
    /// Ticks align to January like calendar intervals. A domain containing no month
    /// boundary gets a single tick at its start.
    pub fn ticks(&self, count: usize) -> Vec<NaiveDate> {
        let Some((start, end)) = self.domain() else { return Vec::new() };
        let first = month_index(start) + i32::from(start.day() != 1);
        let last = month_index(end);
        if last < first {
            return vec![start];
        }
        let step = month_step(self.d0, self.d1, count.max(1) as f64);
        let lo = first + (step - first.rem_euclid(step)) % step;
        (lo..=last)
            .step_by(step as usize)
            .filter_map(from_month_index)
            .collect()
    }
}

const MONTH_DAYS: f64 = 30.0;
const YEAR_DAYS: f64 = 365.0;

/// Interval in months for roughly `count` ticks over the day span `[d0, d1]`.
fn month_step(d0: f64, d1: f64, count: f64) -> i32 {
    const INTERVALS: [(i32, f64); 3] = [(1, MONTH_DAYS), (3, 3.0 * MONTH_DAYS), (12, YEAR_DAYS)];
    let target = (d1 - d0).abs() / count;
    let i = INTERVALS.partition_point(|&(_, days)| days <= target);
    if i == 0 {
        return 1;
    }
    if i == INTERVALS.len() {
        let years = tick_increment(d0.min(d1) / YEAR_DAYS, d0.max(d1) / YEAR_DAYS, count);
        return 12 * (years.round() as i32).max(1);
    }
    let (lower, lower_days) = INTERVALS[i - 1];
    let (upper, upper_days) = INTERVALS[i];
    if target / lower_days < upper_days / target { lower } else { upper }
}

fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

fn from_month_index(index: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(index.div_euclid(12), index.rem_euclid(12) as u32 + 1, 1)
}

/// Continuous linear scale with ticks and outward rounding on a 1/2/5 x 10^k grid.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f32,
    pub r1: f32,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        interpolate(v, self.d0, self.d1, self.r0, self.r1)
    }

    /// Extend the domain outward to round tick values.
    pub fn nice(mut self, count: f64) -> Self {
        let (mut start, mut stop) = (self.d0, self.d1);
        let reversed = stop < start;
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        let mut prestep: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prestep == Some(step) {
                break;
            } else if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prestep = Some(step);
        }
        if reversed {
            std::mem::swap(&mut start, &mut stop);
        }
        self.d0 = start;
        self.d1 = stop;
        self
    }

    /// Round tick values covering the domain; roughly `count` of them.
    pub fn ticks(&self, count: f64) -> Vec<f64> {
        ticks(self.d0.min(self.d1), self.d0.max(self.d1), count)
    }

    /// Tick spacing `ticks(count)` would use; 0 when no ticks are produced.
    pub fn tick_step(&self, count: f64) -> f64 {
        let step = tick_increment(self.d0.min(self.d1), self.d0.max(self.d1), count);
        if step < 0.0 { -1.0 / step } else { step }
    }
}

/// `(i1, i2, inc)`: ticks are `i * inc` for positive `inc`, `i / -inc` otherwise.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    let (i1, i2, inc) = if power < 0.0 {
        let k = 10f64.powf(-power) / factor;
        let mut i1 = (start * k).round();
        let mut i2 = (stop * k).round();
        if i1 / k < start { i1 += 1.0; }
        if i2 / k > stop { i2 -= 1.0; }
        (i1, i2, -k)
    } else {
        let k = 10f64.powf(power) * factor;
        let mut i1 = (start / k).round();
        let mut i2 = (stop / k).round();
        if i1 * k < start { i1 += 1.0; }
        if i2 * k > stop { i2 -= 1.0; }
        (i1, i2, k)
    };
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    if !(stop > start) || !(count > 0.0) {
        return 0.0;
    }
    let inc = tick_spec(start, stop, count).2;
    if inc.is_finite() { inc } else { 0.0 }
}

pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || start.is_nan() || stop.is_nan() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (i1, i2, inc) = tick_spec(start, stop, count);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }
    let n = (i2 - i1) as i64 + 1;
    (0..n)
        .map(|i| {
            let i = i1 + i as f64;
            if inc < 0.0 { i / -inc } else { i * inc }
        })
        .collect()
}

/// Format a tick value with just enough decimals for `step`, thousands grouped.
pub fn format_tick(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let raw = format!("{:.*}", decimals, v);
    let (sign, digits) = match raw.strip_prefix('-') {
        // rounded to zero: no sign
        Some(d) if d.chars().all(|c| c == '0' || c == '.') => ("", d),
        Some(d) => ("\u{2212}", d),
        None => ("", raw.as_str()),
    };
    let (int_part, frac) = digits.split_once('.').map_or((digits, None), |(i, f)| (i, Some(f)));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Discrete scale placing each distinct label in an evenly spaced band.
#[derive(Clone, Debug)]
pub struct BandScale {
    pub domain: Vec<String>,
    pub r0: f32,
    pub r1: f32,
    pub padding_inner: f32,
    pub padding_outer: f32,
    start: f32,
    step: f32,
}

impl BandScale {
    /// Build from labels; repeated labels share one band (first occurrence keeps its slot).
    pub fn new<I, S>(labels: I, range: (f32, f32), padding: f32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut domain: Vec<String> = Vec::new();
        for l in labels {
            let l = l.into();
            if !domain.contains(&l) {
                domain.push(l);
            }
        }
        let mut s = Self {
            domain,
            r0: range.0,
            r1: range.1,
            padding_inner: padding,
            padding_outer: padding,
            start: 0.0,
            step: 0.0,
        };
        s.rescale();
        s
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f32;
        let (lo, hi) = if self.r1 < self.r0 { (self.r1, self.r0) } else { (self.r0, self.r1) };
        self.step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        // centered alignment
        self.start = lo + (hi - lo - self.step * (n - self.padding_inner)) * 0.5;
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn bandwidth(&self) -> f32 {
        self.step * (1.0 - self.padding_inner)
    }

    /// Left edge of the band for `label`, `None` if the label is not in the domain.
    pub fn position(&self, label: &str) -> Option<f32> {
        let i = self.domain.iter().position(|d| d == label)?;
        let i = if self.r1 < self.r0 { self.domain.len() - 1 - i } else { i };
        Some(self.start + self.step * i as f32)
    }

    pub fn center(&self, label: &str) -> Option<f32> {
        self.position(label).map(|x| x + self.bandwidth() * 0.5)
    }
}

/// Scales for the main stacked chart. Built fresh for every render.
#[derive(Clone, Copy, Debug)]
pub struct MainScales {
    pub x: TimeScale,
    pub y: LinearScale,
}

impl MainScales {
    pub fn compute(records: &[Record], layers: &SeriesMap<StackedLayer>, opts: &RenderOptions) -> Self {
        let insets = opts.insets;
        let (left, right) = insets.x_range(opts.width);
        let x = TimeScale::new(TimeScale::extent(records), left, right);
        let extent = value_extent(layers).unwrap_or((f64::NAN, f64::NAN));
        let y = LinearScale::new(extent, insets.y_range(opts.height));
        Self { x, y }
    }
}

/// Scales for the drill-down bar chart. Independent of [`MainScales`].
#[derive(Clone, Debug)]
pub struct MiniScales {
    pub x: BandScale,
    pub y: LinearScale,
}

impl MiniScales {
    pub fn compute(slice: &[MonthValue], opts: &RenderOptions) -> Self {
        let insets: Insets = opts.mini_insets;
        let x = BandScale::new(
            slice.iter().map(|m| m.month.as_str()),
            insets.x_range(opts.mini_width),
            opts.band_padding,
        );
        let y = LinearScale::new((0.0, slice_max(slice).unwrap_or(f64::NAN)), insets.y_range(opts.mini_height))
            .nice(10.0);
        Self { x, y }
    }
}

/// Largest non-NaN value in the slice.
pub fn slice_max(slice: &[MonthValue]) -> Option<f64> {
    slice
        .iter()
        .map(|m| m.value)
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
}
