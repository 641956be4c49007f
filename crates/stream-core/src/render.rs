// File: crates/stream-core/src/render.rs
// Summary: Scene builders for the main streamgraph (areas, time axis, legend) and the
// drill-down bar chart. Pure: same inputs, same scene.

use crate::axis::{Axis, Orient};
use crate::chart::RenderOptions;
use crate::geometry::{area_path, Point, RectF};
use crate::interaction::MonthValue;
use crate::record::Record;
use crate::scale::{slice_max, MainScales, MiniScales};
use crate::scene::{Anchor, Node, Scene};
use crate::series::{Series, SeriesMap};
use crate::stack::StackedLayer;
use crate::theme::{series_color, Theme};

const LEGEND_ROW_HEIGHT: f32 = 25.0;
const LEGEND_SWATCH: f32 = 18.0;
const LEGEND_FONT: f32 = 14.0;
const MINI_MAX_TICKS: f64 = 10.0;

/// Build the main chart: one band per series, bottom month axis, legend.
pub fn render_main(
    records: &[Record],
    layers: &SeriesMap<StackedLayer>,
    opts: &RenderOptions,
    theme: &Theme,
) -> Scene {
    let scales = MainScales::compute(records, layers, opts);
    let mut scene = Scene::new(opts.width + opts.legend_width, opts.height, Some(theme.background));

    for series in Series::ALL {
        let layer = &layers[series];
        let top: Vec<Point> = layer
            .points
            .iter()
            .map(|p| Point::new(scales.x.to_px_opt(p.timestamp), scales.y.to_px(p.high)))
            .collect();
        let bottom: Vec<Point> = layer
            .points
            .iter()
            .map(|p| Point::new(scales.x.to_px_opt(p.timestamp), scales.y.to_px(p.low)))
            .collect();
        scene.push(Node::Area {
            series,
            path: area_path(&top, &bottom, 0.0),
            fill: series_color(series),
            opacity: opts.area_opacity,
        });
    }

    let axis_y = (opts.height - opts.insets.bottom as i32) as f32;
    let axis = Axis::time_bottom(&scales.x, axis_y, opts.main_ticks);
    draw_axis(&mut scene, &axis, theme, opts.draw_labels);

    draw_legend(&mut scene, opts, theme);
    scene
}

fn draw_legend(scene: &mut Scene, opts: &RenderOptions, theme: &Theme) {
    let x0 = (opts.width + 10) as f32;
    let y0 = opts.insets.top as f32;
    for series in Series::ALL {
        let y = y0 + series.index() as f32 * LEGEND_ROW_HEIGHT;
        scene.push(Node::Rect {
            rect: RectF::from_ltwh(x0, y, LEGEND_SWATCH, LEGEND_SWATCH),
            fill: series_color(series),
            stroke: None,
            radius: 0.0,
        });
        if opts.draw_labels {
            scene.push(Node::Text {
                pos: Point::new(x0 + 24.0, y + 14.0),
                text: series.display_name().to_string(),
                size: LEGEND_FONT,
                color: theme.legend_label,
                anchor: Anchor::Start,
            });
        }
    }
}

/// Build the drill-down bar chart for one series' monthly totals.
pub fn render_mini(slice: &[MonthValue], series: Series, opts: &RenderOptions, theme: &Theme) -> Scene {
    let scales = MiniScales::compute(slice, opts);
    let mut scene = Scene::new(opts.mini_width, opts.mini_height, None);
    let baseline = (opts.mini_height - opts.mini_insets.bottom as i32) as f32;
    let bandwidth = scales.x.bandwidth();
    let fill = series_color(series);

    for m in slice {
        let Some(x) = scales.x.position(&m.month) else { continue };
        let y = scales.y.to_px(m.value);
        scene.push(Node::Rect {
            rect: RectF::from_ltwh(x, y, bandwidth, baseline - y),
            fill,
            stroke: None,
            radius: 0.0,
        });
    }

    let x_axis = Axis::band_bottom(&scales.x, baseline);
    draw_axis(&mut scene, &x_axis, theme, opts.draw_labels);

    // one tick per 20 units of the largest value, at most MINI_MAX_TICKS
    let tick_count = slice_max(slice).map_or(0.0, |m| (m / 20.0).min(MINI_MAX_TICKS));
    let y_axis = Axis::linear_left(&scales.y, opts.mini_insets.left as f32, tick_count);
    draw_axis(&mut scene, &y_axis, theme, opts.draw_labels);
    scene
}

fn draw_axis(scene: &mut Scene, axis: &Axis, theme: &Theme, draw_labels: bool) {
    let color = theme.axis_line;
    let (a, b) = axis.range;
    let outer = axis.tick_size;
    match axis.orient {
        Orient::Bottom => {
            let y = axis.offset;
            scene.push(Node::Line { from: Point::new(a, y + outer), to: Point::new(a, y), color, width: 1.0 });
            scene.push(Node::Line { from: Point::new(a, y), to: Point::new(b, y), color, width: 1.0 });
            scene.push(Node::Line { from: Point::new(b, y), to: Point::new(b, y + outer), color, width: 1.0 });
            for t in &axis.ticks {
                if axis.tick_size > 0.0 {
                    scene.push(Node::Line {
                        from: Point::new(t.pos, y),
                        to: Point::new(t.pos, y + axis.tick_size),
                        color,
                        width: 1.0,
                    });
                }
                if draw_labels {
                    scene.push(Node::Text {
                        pos: Point::new(t.pos, y + axis.tick_size.max(0.0) + 3.0 + 0.71 * axis.font_size),
                        text: t.label.clone(),
                        size: axis.font_size,
                        color: theme.axis_label,
                        anchor: Anchor::Middle,
                    });
                }
            }
        }
        Orient::Left => {
            let x = axis.offset;
            scene.push(Node::Line { from: Point::new(x - outer, a), to: Point::new(x, a), color, width: 1.0 });
            scene.push(Node::Line { from: Point::new(x, a), to: Point::new(x, b), color, width: 1.0 });
            scene.push(Node::Line { from: Point::new(x, b), to: Point::new(x - outer, b), color, width: 1.0 });
            for t in &axis.ticks {
                scene.push(Node::Line {
                    from: Point::new(x - axis.tick_size, t.pos),
                    to: Point::new(x, t.pos),
                    color,
                    width: 1.0,
                });
                if draw_labels {
                    scene.push(Node::Text {
                        pos: Point::new(x - axis.tick_size - 3.0, t.pos + 0.32 * axis.font_size),
                        text: t.label.clone(),
                        size: axis.font_size,
                        color: theme.axis_label,
                        anchor: Anchor::End,
                    });
                }
            }
        }
    }
}
