// File: crates/stream-core/src/axis.rs
// Summary: Axis model (tick positions and labels) derived from a scale.

use crate::aggregate::short_month_name;
use crate::scale::{format_tick, BandScale, LinearScale, TimeScale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Position along the axis in pixels.
    pub pos: f32,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    /// y of a bottom axis, x of a left axis.
    pub offset: f32,
    /// Domain line extent along the axis.
    pub range: (f32, f32),
    pub ticks: Vec<Tick>,
    pub tick_size: f32,
    pub font_size: f32,
}

impl Axis {
    /// Month-labelled bottom axis for the main chart.
    pub fn time_bottom(scale: &TimeScale, offset: f32, count: usize) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|d| Tick { pos: scale.to_px(d), label: short_month_name(d).to_string() })
            .collect();
        Self {
            orient: Orient::Bottom,
            offset,
            range: (scale.left_px, scale.right_px),
            ticks,
            tick_size: 6.0,
            font_size: 10.0,
        }
    }

    /// Bottom axis with one unmarked tick per band, labelled at the band center.
    pub fn band_bottom(scale: &BandScale, offset: f32) -> Self {
        let ticks = scale
            .domain
            .iter()
            .filter_map(|label| scale.center(label).map(|pos| Tick { pos, label: label.clone() }))
            .collect();
        Self {
            orient: Orient::Bottom,
            offset,
            range: (scale.r0, scale.r1),
            ticks,
            tick_size: 0.0,
            font_size: 10.0,
        }
    }

    /// Left value axis with roughly `count` ticks (fractional counts are allowed).
    pub fn linear_left(scale: &LinearScale, offset: f32, count: f64) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| Tick { pos: scale.to_px(v), label: format_tick(v, step) })
            .collect();
        Self {
            orient: Orient::Left,
            offset,
            range: (scale.r0, scale.r1),
            ticks,
            tick_size: 6.0,
            font_size: 10.0,
        }
    }
}
