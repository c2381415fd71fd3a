use super::*;

use canvas::geometry::Point;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_matches_fresh_engine() {
    assert_eq!(SurfaceViewState::default(), SurfaceViewState::from_core(&EngineCore::new()));
}

#[test]
fn default_draw_mode_on() {
    let state = SurfaceViewState::default();
    assert!(state.draw_mode);
    assert_eq!(state.point_count, 0);
    assert_eq!(state.selected, None);
}

// =============================================================
// Snapshots
// =============================================================

#[test]
fn snapshot_tracks_points_and_drag() {
    let mut core = EngineCore::new();
    core.on_pointer_down(Point::new(10.0, 10.0));
    core.on_pointer_up();
    core.on_pointer_down(Point::new(200.0, 10.0));
    core.on_pointer_up();
    core.on_pointer_down(Point::new(12.0, 12.0));

    let state = SurfaceViewState::from_core(&core);
    assert_eq!(state.point_count, 2);
    assert_eq!(state.selected.as_deref(), Some("A"));
}

#[test]
fn snapshot_after_toggle() {
    let mut core = EngineCore::new();
    core.toggle_draw_mode();
    assert!(!SurfaceViewState::from_core(&core).draw_mode);
}

// =============================================================
// Captions
// =============================================================

#[test]
fn toggle_caption_follows_mode() {
    let mut state = SurfaceViewState::default();
    assert_eq!(state.draw_mode_caption(), "Draw Mode: On");
    state.draw_mode = false;
    assert_eq!(state.draw_mode_caption(), "Draw Mode: Off");
}

#[test]
fn summary_pluralizes_and_names_drag() {
    let mut state = SurfaceViewState { draw_mode: true, point_count: 1, selected: None };
    assert_eq!(state.summary(), "1 point");
    state.point_count = 3;
    state.selected = Some("B".to_owned());
    assert_eq!(state.summary(), "3 points | dragging B");
}
