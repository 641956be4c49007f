// File: crates/stream-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Main chart width in pixels (the stacked area region, legend excluded).
pub const MAIN_WIDTH: i32 = 400;
/// Main chart height in pixels.
pub const MAIN_HEIGHT: i32 = 400;
/// Extra width reserved right of the main chart for the legend.
pub const LEGEND_WIDTH: i32 = 150;
/// Drill-down chart size inside the overlay.
pub const MINI_WIDTH: i32 = 300;
pub const MINI_HEIGHT: i32 = 200;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Margins around the main stacked chart.
    pub const fn main() -> Self {
        Self::new(50, 30, 20, 30)
    }

    /// Margins around the drill-down bar chart.
    pub const fn mini() -> Self {
        Self::new(30, 10, 10, 25)
    }

    /// Horizontal plot span `[left, width - right]` for a surface of `width`.
    pub fn x_range(&self, width: i32) -> (f32, f32) {
        (self.left as f32, (width - self.right as i32) as f32)
    }

    /// Vertical plot span `[height - bottom, top]`; inverted so larger values sit higher.
    pub fn y_range(&self, height: i32) -> (f32, f32) {
        ((height - self.bottom as i32) as f32, self.top as f32)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::main()
    }
}
