// File: crates/stream-core/src/theme.rs
// Summary: Series palette and light/dark chrome colors.

use skia_safe as skia;

use crate::series::Series;

/// One color per series, in enumeration order.
pub const PALETTE: [skia::Color; 5] = [
    skia::Color::new(0xffe4_1a1c), // red
    skia::Color::new(0xff37_7eb8), // blue
    skia::Color::new(0xff4d_af4a), // green
    skia::Color::new(0xff98_4ea3), // purple
    skia::Color::new(0xffff_7f00), // orange
];

/// Fixed ordinal color for a series.
pub fn series_color(series: Series) -> skia::Color {
    PALETTE[series.index()]
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub legend_label: skia::Color,
    pub overlay_background: skia::Color,
    pub overlay_border: skia::Color,
    pub overlay_shadow: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            legend_label: skia::Color::from_argb(255, 0, 0, 0),
            overlay_background: skia::Color::from_argb(255, 255, 255, 255),
            overlay_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            overlay_shadow: skia::Color::from_argb(26, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_label: skia::Color::from_argb(255, 235, 235, 245),
            overlay_background: skia::Color::from_argb(255, 32, 32, 36),
            overlay_border: skia::Color::from_argb(255, 70, 70, 78),
            overlay_shadow: skia::Color::from_argb(64, 0, 0, 0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
