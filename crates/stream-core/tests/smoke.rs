// File: crates/stream-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNG / SVG and reading back RGBA pixels.

mod common;

use common::{irregular, two_months};
use stream_core::{raster, PointerEvent, RenderError, Series, StreamChart};

#[test]
fn render_smoke_png() {
    let mut chart = StreamChart::default();
    chart.load_dataset(&irregular());

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let svg = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&svg).expect("svg");
    assert!(std::fs::read_to_string(&svg).expect("svg exists").contains("<path"));
}

#[test]
fn render_rgba8_buffer() {
    let mut chart = StreamChart::default();
    chart.opts.draw_labels = false; // avoid font variance
    chart.load_dataset(&two_months());
    let scene = chart.scene().expect("scene");

    let (px, w, h, stride) = raster::rgba8(scene).expect("rgba render");
    assert_eq!((w, h), (550, 400));
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left corner is opaque white background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    // Middle of the GPT-4 band at the January edge carries its red
    let (x, y) = (60usize, 221usize);
    let i = y * stride + x * 4;
    let (r, g, b) = (px[i], px[i + 1], px[i + 2]);
    assert!(r > 200 && g < 80 && b < 80, "expected red-ish, got {r},{g},{b}");
}

#[test]
fn overlay_png_only_while_showing() {
    let mut chart = StreamChart::default();
    chart.load_dataset(&two_months());
    assert!(chart.overlay_png_bytes().expect("overlay").is_none());

    chart.handle_pointer(PointerEvent::Enter { series: Series::Gpt4, x: 100.0, y: 100.0 });
    let bytes = chart.overlay_png_bytes().expect("overlay").expect("visible overlay");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn png_before_any_load_is_an_error() {
    let chart = StreamChart::default();
    assert!(matches!(chart.render_to_png_bytes(), Err(RenderError::NothingRendered)));
}

#[test]
fn png_output_is_deterministic() {
    let render = || {
        let mut chart = StreamChart::default();
        chart.opts.draw_labels = false;
        chart.load_dataset(&irregular());
        chart.render_to_png_bytes().expect("png")
    };
    assert_eq!(render(), render());
}
