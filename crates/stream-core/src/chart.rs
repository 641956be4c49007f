// File: crates/stream-core/src/chart.rs
// Summary: StreamChart owns the loaded dataset and the overlay; every load or hover
// rebuilds the affected scene from scratch.

use std::path::Path;

use crate::aggregate::{aggregate_by_month, MonthBucket};
use crate::error::RenderError;
use crate::interaction::{Overlay, PointerEvent};
use crate::raster;
use crate::record::{normalize, RawRecord, Record};
use crate::render::render_main;
use crate::scale::MainScales;
use crate::scene::Scene;
use crate::series::{Series, SeriesMap};
use crate::stack::{layout_default, StackedLayer};
use crate::theme::Theme;
use crate::types::{Insets, LEGEND_WIDTH, MAIN_HEIGHT, MAIN_WIDTH, MINI_HEIGHT, MINI_WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Main chart width; the legend is drawn to its right.
    pub width: i32,
    pub height: i32,
    pub legend_width: i32,
    pub insets: Insets,
    pub mini_width: i32,
    pub mini_height: i32,
    pub mini_insets: Insets,
    /// Inner and outer padding of the drill-down bands, as a fraction of the step.
    pub band_padding: f32,
    pub area_opacity: f32,
    /// Overlay sits this many pixels right of and below the pointer.
    pub overlay_offset: f32,
    /// Target tick count of the main time axis.
    pub main_ticks: usize,
    /// Text is skipped when false (deterministic snapshots).
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: MAIN_WIDTH,
            height: MAIN_HEIGHT,
            legend_width: LEGEND_WIDTH,
            insets: Insets::main(),
            mini_width: MINI_WIDTH,
            mini_height: MINI_HEIGHT,
            mini_insets: Insets::mini(),
            band_padding: 0.1,
            area_opacity: 0.9,
            overlay_offset: 10.0,
            main_ticks: 6,
            draw_labels: true,
        }
    }
}

/// The loaded dataset and what the last render derived from it.
#[derive(Clone, Debug, Default)]
pub struct ChartState {
    pub dataset: Vec<Record>,
    pub buckets: Vec<MonthBucket>,
    pub layers: Option<SeriesMap<StackedLayer>>,
}

pub struct StreamChart {
    pub opts: RenderOptions,
    pub theme: Theme,
    state: ChartState,
    scene: Option<Scene>,
    overlay: Option<Overlay>,
}

impl StreamChart {
    pub fn new(opts: RenderOptions, theme: Theme) -> Self {
        Self { opts, theme, state: ChartState::default(), scene: None, overlay: None }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// Last rendered main scene.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Overlay container; exists once the first render happened.
    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Replace the dataset and redraw.
    /// An empty `rows` is a no-op that leaves the current drawing alone; returns false.
    pub fn load_dataset(&mut self, rows: &[RawRecord]) -> bool {
        if rows.is_empty() {
            tracing::debug!("empty dataset; keeping current chart");
            return false;
        }
        self.state.dataset = normalize(rows);
        tracing::debug!(rows = self.state.dataset.len(), "dataset loaded");
        self.render();
        true
    }

    /// Full rebuild of the main scene from the current dataset.
    pub fn render(&mut self) -> Option<&Scene> {
        if self.state.dataset.is_empty() {
            return self.scene.as_ref();
        }
        let records = &self.state.dataset;
        let buckets = aggregate_by_month(records);
        let layers = layout_default(records);
        let scene = render_main(records, &layers, &self.opts, &self.theme);

        self.state.buckets = buckets;
        self.state.layers = Some(layers);
        self.overlay.get_or_insert_with(Overlay::hidden);
        self.scene = Some(scene);
        self.scene.as_ref()
    }

    /// Dispatch a pointer event to the overlay. Ignored before the first render.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let Some(overlay) = self.overlay.as_mut() else {
            tracing::trace!(?event, "pointer event before first render");
            return;
        };
        overlay.handle(event, &self.state.buckets, &self.opts, &self.theme);
    }

    /// Hit-test the main scene at `(x, y)` and, on a band, fire the enter event there.
    pub fn pointer_enter_at(&mut self, x: f32, y: f32) -> Option<Series> {
        let series = self.scene.as_ref()?.hit_test(x, y)?;
        self.handle_pointer(PointerEvent::Enter { series, x, y });
        Some(series)
    }

    /// Hover `series` at the middle of its thickest sample. False when the band has
    /// no drawable thickness.
    pub fn hover_series(&mut self, series: Series) -> bool {
        let Some((x, y)) = self.band_anchor(series) else { return false };
        self.handle_pointer(PointerEvent::Enter { series, x, y });
        true
    }

    fn band_anchor(&self, series: Series) -> Option<(f32, f32)> {
        let layers = self.state.layers.as_ref()?;
        let scales = MainScales::compute(&self.state.dataset, layers, &self.opts);
        let point = layers[series]
            .points
            .iter()
            .filter(|p| p.timestamp.is_some() && p.height() > 0.0)
            .max_by(|a, b| a.height().total_cmp(&b.height()))?;
        let x = scales.x.to_px_opt(point.timestamp);
        let y = scales.y.to_px((point.low + point.high) / 2.0);
        (x.is_finite() && y.is_finite()).then_some((x, y))
    }

    /// Render the main scene to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(&self, output_png_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let scene = self.scene.as_ref().ok_or(RenderError::NothingRendered)?;
        raster::write_png(scene, output_png_path)
    }

    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let scene = self.scene.as_ref().ok_or(RenderError::NothingRendered)?;
        raster::png_bytes(scene)
    }

    pub fn render_to_svg(&self, output_svg_path: impl AsRef<Path>) -> Result<(), RenderError> {
        let scene = self.scene.as_ref().ok_or(RenderError::NothingRendered)?;
        raster::write_file(output_svg_path, scene.to_svg().as_bytes())
    }

    /// PNG of the framed overlay; `None` while it is hidden.
    pub fn overlay_png_bytes(&self) -> Result<Option<Vec<u8>>, RenderError> {
        let framed = self.overlay.as_ref().and_then(|o| o.framed_scene(&self.theme));
        framed.map(|s| raster::png_bytes(&s)).transpose()
    }
}

impl Default for StreamChart {
    fn default() -> Self {
        Self::new(RenderOptions::default(), Theme::default())
    }
}
