// File: crates/stream-core/tests/scene.rs
// Purpose: Scene contents for the main chart and the drill-down chart, and SVG output.

mod common;

use common::{irregular, row, two_months};
use stream_core::geometry::PathCmd;
use stream_core::record::normalize;
use stream_core::render::{render_main, render_mini};
use stream_core::scene::Node;
use stream_core::theme::{series_color, Theme};
use stream_core::{layout_default, monthly_slice, aggregate_by_month, RenderOptions, Series};

fn main_scene(rows: &[stream_core::RawRecord], opts: &RenderOptions) -> stream_core::Scene {
    let records = normalize(rows);
    let layers = layout_default(&records);
    render_main(&records, &layers, opts, &Theme::light())
}

#[test]
fn main_scene_has_one_area_per_series_in_order() {
    let scene = main_scene(&irregular(), &RenderOptions::default());
    assert_eq!((scene.width, scene.height), (550, 400));
    let series: Vec<_> = scene.areas().map(|(s, _)| s).collect();
    assert_eq!(series, Series::ALL.to_vec());
    for node in &scene.nodes {
        if let Node::Area { series, fill, opacity, .. } = node {
            assert_eq!(*fill, series_color(*series));
            assert_eq!(*opacity, 0.9);
        }
    }
}

#[test]
fn legend_lists_series_in_fixed_rows() {
    let scene = main_scene(&two_months(), &RenderOptions::default());
    let swatches: Vec<_> = scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Rect { rect, fill, .. } => Some((rect.left, rect.top, rect.width(), *fill)),
            _ => None,
        })
        .collect();
    assert_eq!(swatches.len(), 5);
    for (i, (left, top, w, fill)) in swatches.into_iter().enumerate() {
        assert_eq!(left, 410.0);
        assert_eq!(top, 20.0 + 25.0 * i as f32);
        assert_eq!(w, 18.0);
        assert_eq!(fill, series_color(Series::ALL[i]));
    }
    let texts: Vec<_> = scene.texts().collect();
    for s in Series::ALL {
        assert!(texts.contains(&s.display_name()));
    }
    assert!(texts.contains(&"Jan") && texts.contains(&"Feb"));
}

#[test]
fn labels_can_be_switched_off() {
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let scene = main_scene(&two_months(), &opts);
    assert_eq!(scene.texts().count(), 0);
}

#[test]
fn single_record_renders_zero_width_bands() {
    let scene = main_scene(&[row("07/04/24", [3.0, 1.0, 0.0, 2.0, 0.0])], &RenderOptions::default());
    let (_, path) = scene.areas().next().unwrap();
    match path.first() {
        Some(PathCmd::MoveTo(p)) => assert!((p.x - 210.0).abs() < 1e-3),
        other => panic!("unexpected path start {other:?}"),
    }
    assert!(matches!(path.last(), Some(PathCmd::Close)));
}

#[test]
fn unplottable_rows_split_the_band() {
    let rows = vec![
        row("01/01/24", [1.0, 1.0, 1.0, 1.0, 1.0]),
        row("02/01/24", [2.0, 2.0, 2.0, 2.0, 2.0]),
        row("garbage", [3.0, 3.0, 3.0, 3.0, 3.0]),
        row("03/01/24", [4.0, 4.0, 4.0, 4.0, 4.0]),
        row("04/01/24", [5.0, 5.0, 5.0, 5.0, 5.0]),
    ];
    let scene = main_scene(&rows, &RenderOptions::default());
    let (_, path) = scene.areas().next().unwrap();
    let runs = path.iter().filter(|c| matches!(c, PathCmd::MoveTo(_))).count();
    assert_eq!(runs, 2);
    assert!(scene.to_svg().contains("data-series=\"GPT-4\""));
}

#[test]
fn mini_scene_draws_one_bar_per_month() {
    let buckets = aggregate_by_month(&normalize(&irregular()));
    let slice = monthly_slice(&buckets, Series::Gpt4);
    let opts = RenderOptions::default();
    let scene = render_mini(&slice, Series::Gpt4, &opts, &Theme::light());
    assert_eq!((scene.width, scene.height), (300, 200));

    let bars: Vec<_> = scene
        .nodes
        .iter()
        .filter_map(|n| match n {
            Node::Rect { rect, fill, .. } => Some((*rect, *fill)),
            _ => None,
        })
        .collect();
    assert_eq!(bars.len(), slice.len());
    for (rect, fill) in &bars {
        assert_eq!(*fill, series_color(Series::Gpt4));
        assert!((rect.bottom - 175.0).abs() < 1e-3);
    }
    // Mar holds the largest total (27) and is the tallest bar
    let tallest = bars.iter().map(|(r, _)| r.height()).fold(0.0f32, f32::max);
    assert_eq!(bars[0].0.height(), tallest);

    let texts: Vec<_> = scene.texts().collect();
    for m in ["Mar", "Jan", "Feb", "Apr"] {
        assert!(texts.contains(&m), "missing month label {m}");
    }
    assert!(texts.contains(&"20"));
}

#[test]
fn svg_serializes_every_node() {
    let scene = main_scene(&two_months(), &RenderOptions::default());
    let svg = scene.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<path").count(), 5);
    assert!(svg.contains("#e41a1c"));
    assert!(svg.contains(">LLaMA-3.1</text>"));
}

#[test]
fn mini_left_axis_stays_small_for_huge_totals() {
    let opts = RenderOptions::default();
    for big in [2e8, 1e13] {
        let rows = vec![
            row("01/05/24", [big, 1.0, 0.0, 0.0, 0.0]),
            row("02/05/24", [big / 2.0, 1.0, 0.0, 0.0, 0.0]),
        ];
        let buckets = aggregate_by_month(&normalize(&rows));
        let slice = monthly_slice(&buckets, Series::Gpt4);
        let scene = render_mini(&slice, Series::Gpt4, &opts, &Theme::light());
        let labels = scene.texts().count();
        // two month labels plus the value ticks
        assert!(labels > 2 && labels <= 2 + 11, "{big}: {labels} labels");
        assert!(scene.nodes.len() < 64, "{big}: {} nodes", scene.nodes.len());
    }
}
