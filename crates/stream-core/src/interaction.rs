// File: crates/stream-core/src/interaction.rs
// Summary: Hover drill-down: per-month slice of one series and the overlay state machine.

use crate::aggregate::MonthBucket;
use crate::chart::RenderOptions;
use crate::geometry::Point;
use crate::render::render_mini;
use crate::scene::Scene;
use crate::series::Series;
use crate::theme::Theme;

/// One bar of the drill-down chart.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthValue {
    /// Short month name (`Jan`).
    pub month: String,
    pub value: f64,
}

/// Project already-aggregated buckets onto one series, keeping bucket order.
/// Yields exactly one entry per bucket.
pub fn monthly_slice(buckets: &[MonthBucket], series: Series) -> Vec<MonthValue> {
    buckets
        .iter()
        .map(|b| MonthValue { month: b.label().to_string(), value: b.total(series) })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the drawn band of `series` at page position `(x, y)`.
    Enter { series: Series, x: f32, y: f32 },
    Leave { series: Series },
}

#[derive(Clone, Debug, PartialEq)]
pub enum OverlayState {
    Idle,
    Showing { series: Series, slice: Vec<MonthValue> },
}

/// The pointer-following container hosting the drill-down chart.
/// Created once, then only repositioned, refilled and toggled.
#[derive(Clone, Debug)]
pub struct Overlay {
    pub state: OverlayState,
    pub visible: bool,
    /// Top-left corner in page coordinates.
    pub position: Point,
    pub width: i32,
    pub height: i32,
    /// Inner spacing between the frame and the chart.
    pub padding: f32,
    pub corner_radius: f32,
    content: Option<Scene>,
}

impl Overlay {
    /// Hidden, empty container.
    pub fn hidden() -> Self {
        Self {
            state: OverlayState::Idle,
            visible: false,
            position: Point::new(0.0, 0.0),
            width: 0,
            height: 0,
            padding: 10.0,
            corner_radius: 8.0,
            content: None,
        }
    }

    pub fn showing(&self) -> Option<Series> {
        match self.state {
            OverlayState::Showing { series, .. } => Some(series),
            OverlayState::Idle => None,
        }
    }

    /// The drill-down chart currently shown, if any.
    pub fn content(&self) -> Option<&Scene> {
        self.content.as_ref()
    }

    /// Replace whatever the overlay held with a fresh chart for `series`.
    fn show(&mut self, series: Series, slice: Vec<MonthValue>, at: Point, content: Scene) {
        self.width = content.width;
        self.height = content.height;
        self.position = at;
        self.visible = true;
        self.content = Some(content);
        self.state = OverlayState::Showing { series, slice };
    }

    /// Apply a pointer event. Runs to completion; the latest event always wins.
    ///
    /// `Leave` does not hide the overlay: it stays where the last hover put it until
    /// the next `Enter` replaces it.
    pub fn handle(&mut self, event: PointerEvent, buckets: &[MonthBucket], opts: &RenderOptions, theme: &Theme) {
        match event {
            PointerEvent::Enter { series, x, y } => {
                let slice = monthly_slice(buckets, series);
                let content = render_mini(&slice, series, opts, theme);
                let at = Point::new(x + opts.overlay_offset, y + opts.overlay_offset);
                tracing::debug!(%series, months = slice.len(), x = at.x, y = at.y, "overlay showing");
                self.show(series, slice, at, content);
            }
            PointerEvent::Leave { series } => {
                tracing::trace!(%series, "pointer left band; overlay kept");
            }
        }
    }

    /// Framed overlay: background, border and the chart inset by `padding`.
    /// `None` while hidden.
    pub fn framed_scene(&self, theme: &Theme) -> Option<Scene> {
        use crate::geometry::RectF;
        use crate::scene::Node;

        if !self.visible {
            return None;
        }
        let content = self.content.as_ref()?;
        let pad = self.padding;
        let w = (content.width as f32 + pad * 2.0).ceil() as i32;
        let h = (content.height as f32 + pad * 2.0).ceil() as i32;
        let mut scene = Scene::new(w, h, None);
        scene.push(Node::Rect {
            rect: RectF::from_ltwh(2.0, 4.0, w as f32 - 2.0, h as f32 - 4.0),
            fill: theme.overlay_shadow,
            stroke: None,
            radius: self.corner_radius,
        });
        scene.push(Node::Rect {
            rect: RectF::from_ltwh(0.5, 0.5, w as f32 - 3.0, h as f32 - 5.0),
            fill: theme.overlay_background,
            stroke: Some(theme.overlay_border),
            radius: self.corner_radius,
        });
        scene.nodes.extend(content.nodes.iter().map(|n| n.translated(pad, pad)));
        Some(scene)
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::hidden()
    }
}
