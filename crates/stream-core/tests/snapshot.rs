// File: crates/stream-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic charts (labels off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
// Goldens are not checked in, so the tests are ignored by default; run with
// `UPDATE_SNAPSHOTS=1 cargo test -- --ignored` once to bless them.

mod common;

use common::irregular;
use stream_core::{PointerEvent, Series, StreamChart};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn chart() -> StreamChart {
    let mut chart = StreamChart::default();
    chart.opts.draw_labels = false; // avoid text nondeterminism across platforms
    chart.load_dataset(&irregular());
    chart
}

#[test]
#[ignore = "golden PNGs are blessed locally with UPDATE_SNAPSHOTS=1"]
fn golden_streamgraph() {
    let bytes = chart().render_to_png_bytes().expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/streamgraph.png");
    write_or_compare(&path, &bytes);
}

#[test]
#[ignore = "golden PNGs are blessed locally with UPDATE_SNAPSHOTS=1"]
fn golden_overlay() {
    let mut chart = chart();
    chart.handle_pointer(PointerEvent::Enter { series: Series::Claude, x: 0.0, y: 0.0 });
    let bytes = chart.overlay_png_bytes().expect("render bytes").expect("overlay visible");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/overlay_claude.png");
    write_or_compare(&path, &bytes);
}
