// File: crates/stream-core/tests/interaction.rs
// Purpose: Chart lifecycle (load, empty no-op) and the hover overlay state machine.

mod common;

use common::{irregular, row, two_months};
use stream_core::{OverlayState, PointerEvent, Series, StreamChart};

fn loaded(rows: &[stream_core::RawRecord]) -> StreamChart {
    let mut chart = StreamChart::default();
    assert!(chart.load_dataset(rows));
    chart
}

#[test]
fn empty_dataset_is_a_no_op() {
    let mut chart = StreamChart::default();
    assert!(!chart.load_dataset(&[]));
    assert!(chart.scene().is_none());
    assert!(chart.overlay().is_none());
    assert!(chart.render().is_none());

    let mut chart = loaded(&two_months());
    let before = chart.scene().cloned();
    assert!(!chart.load_dataset(&[]));
    assert_eq!(chart.scene().cloned(), before);
    assert_eq!(chart.state().dataset.len(), 2);
}

#[test]
fn overlay_is_created_hidden_on_first_render() {
    let chart = loaded(&two_months());
    let overlay = chart.overlay().expect("overlay exists after render");
    assert!(!overlay.visible);
    assert_eq!(overlay.state, OverlayState::Idle);
    assert!(overlay.content().is_none());
}

#[test]
fn pointer_before_render_is_ignored() {
    let mut chart = StreamChart::default();
    chart.handle_pointer(PointerEvent::Enter { series: Series::Gpt4, x: 10.0, y: 10.0 });
    assert!(chart.overlay().is_none());
}

#[test]
fn hover_shows_monthly_slice_for_series() {
    let mut chart = loaded(&two_months());
    chart.handle_pointer(PointerEvent::Enter { series: Series::Gemini, x: 120.0, y: 200.0 });

    let overlay = chart.overlay().unwrap();
    assert!(overlay.visible);
    assert_eq!((overlay.position.x, overlay.position.y), (130.0, 210.0));
    assert_eq!((overlay.width, overlay.height), (300, 200));
    match &overlay.state {
        OverlayState::Showing { series, slice } => {
            assert_eq!(*series, Series::Gemini);
            let got: Vec<_> = slice.iter().map(|m| (m.month.as_str(), m.value)).collect();
            assert_eq!(got, vec![("Jan", 5.0), ("Feb", 15.0)]);
        }
        other => panic!("expected Showing, got {other:?}"),
    }
    let content = overlay.content().unwrap();
    assert!(content.texts().any(|t| t == "Jan"));
}

#[test]
fn leave_keeps_overlay_and_next_enter_wins() {
    let mut chart = loaded(&irregular());
    chart.handle_pointer(PointerEvent::Enter { series: Series::Claude, x: 0.0, y: 0.0 });
    chart.handle_pointer(PointerEvent::Leave { series: Series::Claude });
    assert_eq!(chart.overlay().unwrap().showing(), Some(Series::Claude));
    assert!(chart.overlay().unwrap().visible);

    chart.handle_pointer(PointerEvent::Enter { series: Series::Palm2, x: 40.0, y: 50.0 });
    let overlay = chart.overlay().unwrap();
    assert_eq!(overlay.showing(), Some(Series::Palm2));
    assert_eq!((overlay.position.x, overlay.position.y), (50.0, 60.0));
}

#[test]
fn hit_test_drives_pointer_enter() {
    let mut chart = loaded(&two_months());
    // inside GPT-4's band just right of the January edge
    assert_eq!(chart.pointer_enter_at(60.0, 221.0), Some(Series::Gpt4));
    assert_eq!(chart.overlay().unwrap().showing(), Some(Series::Gpt4));

    assert_eq!(chart.pointer_enter_at(60.0, 145.0), Some(Series::Gemini));
    // above the stack and over the legend: nothing under the pointer
    assert_eq!(chart.pointer_enter_at(60.0, 25.0), None);
    assert_eq!(chart.pointer_enter_at(450.0, 30.0), None);
    assert_eq!(chart.overlay().unwrap().showing(), Some(Series::Gemini));
}

#[test]
fn hover_series_finds_band_interior() {
    let mut chart = loaded(&irregular());
    for s in Series::ALL {
        assert!(chart.hover_series(s));
        assert_eq!(chart.overlay().unwrap().showing(), Some(s));
    }
    // zero-height series has nothing to hover
    let mut chart = loaded(&two_months());
    assert!(!chart.hover_series(Series::Claude));
}

#[test]
fn reload_replaces_dataset_and_buckets() {
    let mut chart = loaded(&two_months());
    assert_eq!(chart.state().buckets.len(), 2);
    assert!(chart.load_dataset(&[row("09/09/24", [1.0, 2.0, 3.0, 4.0, 5.0])]));
    assert_eq!(chart.state().dataset.len(), 1);
    assert_eq!(chart.state().buckets.len(), 1);
    assert_eq!(chart.state().buckets[0].label(), "Sep");
}

#[test]
fn rendering_twice_is_identical() {
    let a = loaded(&irregular());
    let b = loaded(&irregular());
    assert_eq!(a.scene(), b.scene());
    assert_eq!(a.scene().unwrap().to_svg(), b.scene().unwrap().to_svg());
}
