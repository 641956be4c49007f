// File: crates/stream-core/src/lib.rs
// Summary: Streamgraph core: normalization, monthly aggregation, silhouette stacking,
// scales, scene rendering and the hover drill-down overlay.

pub mod aggregate;
pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod raster;
pub mod record;
pub mod render;
pub mod scale;
pub mod scene;
pub mod series;
pub mod stack;
pub mod text;
pub mod theme;
pub mod types;

pub use aggregate::{aggregate_by_month, MonthBucket};
pub use chart::{ChartState, RenderOptions, StreamChart};
pub use error::RenderError;
pub use interaction::{monthly_slice, MonthValue, Overlay, OverlayState, PointerEvent};
pub use record::{normalize, RawRecord, Record};
pub use scene::Scene;
pub use series::{Series, SeriesMap};
pub use stack::{layout, layout_default, StackPoint, StackedLayer};
pub use text::TextShaper;
pub use theme::Theme;
