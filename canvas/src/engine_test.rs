#![allow(clippy::float_cmp)]

use super::*;
use crate::measure::{format_angle, format_length};

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn label(s: &str) -> Label {
    Label::from(s)
}

fn has_action<F>(actions: &[Action], pred: F) -> bool
where
    F: Fn(&Action) -> bool,
{
    actions.iter().any(pred)
}

fn has_render_needed(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::RenderNeeded))
}

fn has_point_created(actions: &[Action]) -> bool {
    has_action(actions, |a| matches!(a, Action::PointCreated { .. }))
}

/// Click (down + up) at each position.
fn click_all(core: &mut EngineCore, positions: &[(f64, f64)]) {
    for &(x, y) in positions {
        core.on_pointer_down(pt(x, y));
        core.on_pointer_up();
    }
}

fn texts(scene: &[DrawOp]) -> Vec<String> {
    scene
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

fn line_count(scene: &[DrawOp]) -> usize {
    scene.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count()
}

// =============================================================
// EngineCore: construction and defaults
// =============================================================

#[test]
fn core_new_is_empty_and_idle() {
    let core = EngineCore::new();
    assert_eq!(core.point_count(), 0);
    assert!(core.selection().is_none());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn core_default_draw_mode_on() {
    assert!(EngineCore::new().draw_mode());
}

#[test]
fn core_with_config_keeps_config() {
    let config = SurfaceConfig { px_per_cm: 10.0, ..SurfaceConfig::default() };
    let core = EngineCore::with_config(config);
    assert_eq!(core.config.px_per_cm, 10.0);
}

// =============================================================
// Pointer down: creation
// =============================================================

#[test]
fn pointer_down_on_empty_creates_a() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_down(pt(100.0, 100.0));
    assert!(has_point_created(&actions));
    assert!(has_render_needed(&actions));
    assert_eq!(core.point(&label("A")), Some(pt(100.0, 100.0)));
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn pointer_down_reports_created_label_and_position() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_down(pt(7.0, 8.0));
    assert_eq!(actions[0], Action::PointCreated { label: label("A"), point: pt(7.0, 8.0) });
}

#[test]
fn far_apart_presses_create_sequential_labels() {
    let mut core = EngineCore::new();
    let positions = [(0.0, 0.0), (100.0, 0.0), (200.0, 0.0), (300.0, 0.0), (400.0, 0.0)];
    for (i, &(x, y)) in positions.iter().enumerate() {
        core.on_pointer_down(pt(x, y));
        core.on_pointer_up();
        assert_eq!(core.point_count(), i + 1);
    }
    let labels: Vec<&str> = core.points.labels().map(Label::as_str).collect();
    assert_eq!(labels, ["A", "B", "C", "D", "E"]);
}

#[test]
fn twenty_seventh_point_is_aa() {
    let mut core = EngineCore::new();
    let positions: Vec<(f64, f64)> = (0..27_i32).map(|i| (f64::from(i % 9) * 100.0, f64::from(i / 9) * 100.0)).collect();
    click_all(&mut core, &positions);
    assert_eq!(core.point_count(), 27);
    assert!(core.point(&label("Z")).is_some());
    assert_eq!(core.point(&label("AA")), Some(pt(800.0, 200.0)));
}

#[test]
fn pointer_down_with_draw_mode_off_is_noop() {
    let mut core = EngineCore::new();
    core.set_draw_mode(false);
    let actions = core.on_pointer_down(pt(50.0, 50.0));
    assert!(actions.is_empty());
    assert_eq!(core.point_count(), 0);
    assert_eq!(core.input, InputState::Idle);
}

// =============================================================
// Pointer down: selection
// =============================================================

#[test]
fn press_near_point_selects_instead_of_creating() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    let actions = core.on_pointer_down(pt(110.0, 105.0));
    assert!(!has_point_created(&actions));
    assert!(has_action(&actions, |a| *a == Action::SelectionChanged(Some(label("A")))));
    assert_eq!(core.point_count(), 1);
    assert_eq!(core.selection(), Some(&label("A")));
    assert_eq!(core.input, InputState::Dragging { label: label("A") });
}

#[test]
fn press_exactly_at_radius_creates_new_point() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(120.0, 100.0));
    assert_eq!(core.point_count(), 2);
    assert!(core.selection().is_none());
}

#[test]
fn press_between_overlapping_points_selects_oldest() {
    let mut core = EngineCore::new();
    // Second press lands 25 px away, so it is a new point.
    click_all(&mut core, &[(100.0, 100.0), (125.0, 100.0)]);
    core.on_pointer_down(pt(112.0, 100.0));
    assert_eq!(core.selection(), Some(&label("A")));
}

#[test]
fn press_does_not_move_the_grabbed_point() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(110.0, 110.0));
    assert_eq!(core.point(&label("A")), Some(pt(100.0, 100.0)));
}

#[test]
fn custom_proximity_is_respected() {
    let config = SurfaceConfig { proximity_px: 5.0, ..SurfaceConfig::default() };
    let mut core = EngineCore::with_config(config);
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(110.0, 100.0));
    assert_eq!(core.point_count(), 2);
}

// =============================================================
// Pointer move
// =============================================================

#[test]
fn drag_moves_selected_point_only() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (200.0, 0.0), (200.0, 200.0)]);
    core.on_pointer_down(pt(202.0, 1.0));
    let actions = core.on_pointer_move(pt(250.0, 40.0));
    assert!(has_action(&actions, |a| *a == Action::PointMoved { label: label("B"), point: pt(250.0, 40.0) }));
    assert!(has_render_needed(&actions));
    assert_eq!(core.point(&label("B")), Some(pt(250.0, 40.0)));
    assert_eq!(core.point(&label("A")), Some(pt(0.0, 0.0)));
    assert_eq!(core.point(&label("C")), Some(pt(200.0, 200.0)));
}

#[test]
fn drag_follows_every_move() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(50.0, 50.0)]);
    core.on_pointer_down(pt(50.0, 50.0));
    for step in 1..=10_i32 {
        let p = pt(50.0 + f64::from(step) * 7.0, 50.0 - f64::from(step) * 3.0);
        core.on_pointer_move(p);
        assert_eq!(core.point(&label("A")), Some(p));
    }
}

#[test]
fn drag_keeps_label_and_order() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (100.0, 0.0)]);
    core.on_pointer_down(pt(0.0, 0.0));
    core.on_pointer_move(pt(500.0, 500.0));
    let labels: Vec<&str> = core.points.labels().map(Label::as_str).collect();
    assert_eq!(labels, ["A", "B"]);
}

#[test]
fn move_while_draw_mode_off_is_ignored_but_selection_persists() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(100.0, 100.0));
    core.set_draw_mode(false);
    let actions = core.on_pointer_move(pt(300.0, 300.0));
    assert!(actions.is_empty());
    assert_eq!(core.point(&label("A")), Some(pt(100.0, 100.0)));
    assert_eq!(core.selection(), Some(&label("A")));
}

#[test]
fn move_while_idle_does_not_move_points() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    let actions = core.on_pointer_move(pt(105.0, 105.0));
    assert!(!has_render_needed(&actions));
    assert_eq!(core.point(&label("A")), Some(pt(100.0, 100.0)));
}

#[test]
fn hover_reports_grab_cursor_once() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    let first = core.on_pointer_move(pt(104.0, 100.0));
    assert_eq!(first, vec![Action::SetCursor("grab".into())]);
    let second = core.on_pointer_move(pt(103.0, 100.0));
    assert!(second.is_empty());
    let away = core.on_pointer_move(pt(400.0, 400.0));
    assert_eq!(away, vec![Action::SetCursor("crosshair".into())]);
}

#[test]
fn hover_with_draw_mode_off_never_grabs() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.set_draw_mode(false);
    let actions = core.on_pointer_move(pt(100.0, 100.0));
    assert_eq!(actions, vec![Action::SetCursor("crosshair".into())]);
}

// =============================================================
// Pointer up
// =============================================================

#[test]
fn pointer_up_clears_selection() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(100.0, 100.0));
    let actions = core.on_pointer_up();
    assert!(has_action(&actions, |a| *a == Action::SelectionChanged(None)));
    assert!(core.selection().is_none());
    assert_eq!(core.input, InputState::Idle);
}

#[test]
fn pointer_up_when_idle_is_harmless() {
    let mut core = EngineCore::new();
    let actions = core.on_pointer_up();
    assert!(actions.is_empty());
    assert!(core.selection().is_none());
}

#[test]
fn pointer_up_with_draw_mode_off_still_clears_selection() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(100.0, 100.0));
    core.set_draw_mode(false);
    core.on_pointer_up();
    assert!(core.selection().is_none());
}

#[test]
fn move_after_release_does_not_drag() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(100.0, 100.0));
    core.on_pointer_up();
    core.on_pointer_move(pt(300.0, 300.0));
    assert_eq!(core.point(&label("A")), Some(pt(100.0, 100.0)));
}

#[test]
fn pointer_cancel_mid_drag_ends_drag() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(100.0, 100.0));
    core.on_pointer_move(pt(150.0, 150.0));
    let actions = core.on_pointer_cancel();
    assert!(has_action(&actions, |a| *a == Action::SelectionChanged(None)));
    assert!(core.selection().is_none());
    assert_eq!(core.input, InputState::Idle);

    core.on_pointer_move(pt(300.0, 300.0));
    assert_eq!(core.point(&label("A")), Some(pt(150.0, 150.0)));
}

#[test]
fn pointer_cancel_when_idle_is_harmless() {
    let mut core = EngineCore::new();
    assert!(core.on_pointer_cancel().is_empty());
}

// =============================================================
// Draw mode
// =============================================================

#[test]
fn toggle_flips_draw_mode() {
    let mut core = EngineCore::new();
    let actions = core.toggle_draw_mode();
    assert_eq!(actions, vec![Action::DrawModeChanged(false), Action::RenderNeeded]);
    assert!(!core.draw_mode());
    core.toggle_draw_mode();
    assert!(core.draw_mode());
}

#[test]
fn set_draw_mode_unchanged_is_noop() {
    let mut core = EngineCore::new();
    assert!(core.set_draw_mode(true).is_empty());
}

#[test]
fn toggle_does_not_touch_points_or_selection() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (100.0, 0.0)]);
    core.on_pointer_down(pt(100.0, 0.0));
    core.toggle_draw_mode();
    assert_eq!(core.point_count(), 2);
    assert_eq!(core.selection(), Some(&label("B")));
    assert_eq!(core.input, InputState::Dragging { label: label("B") });
}

#[test]
fn toggle_off_and_on_preserves_rendered_measurements() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let before = core.scene();
    core.toggle_draw_mode();
    let hidden = core.scene();
    core.toggle_draw_mode();
    let after = core.scene();
    assert_eq!(before, after);
    assert_eq!(texts(&before), texts(&hidden));
    assert_eq!(line_count(&before), 3);
    assert_eq!(line_count(&hidden), 0);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_removes_all_points() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let actions = core.clear();
    assert!(has_action(&actions, |a| *a == Action::Cleared));
    assert!(has_render_needed(&actions));
    assert_eq!(core.point_count(), 0);
}

#[test]
fn clear_while_dragging_drops_selection() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(100.0, 100.0)]);
    core.on_pointer_down(pt(100.0, 100.0));
    core.clear();
    assert!(core.selection().is_none());
    assert_eq!(core.input, InputState::Idle);
    // A stale move must not resurrect the point.
    core.on_pointer_move(pt(200.0, 200.0));
    assert_eq!(core.point_count(), 0);
}

#[test]
fn clear_twice_equals_clear_once() {
    let mut once = EngineCore::new();
    click_all(&mut once, &[(0.0, 0.0), (100.0, 0.0)]);
    once.clear();

    let mut twice = EngineCore::new();
    click_all(&mut twice, &[(0.0, 0.0), (100.0, 0.0)]);
    twice.clear();
    twice.clear();

    assert_eq!(once.point_count(), twice.point_count());
    assert_eq!(once.selection(), twice.selection());
    assert_eq!(once.scene(), twice.scene());
}

#[test]
fn clear_with_draw_mode_off_still_clears() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0)]);
    core.set_draw_mode(false);
    core.clear();
    assert_eq!(core.point_count(), 0);
    assert!(!core.draw_mode());
}

#[test]
fn labels_restart_after_clear() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (100.0, 0.0)]);
    core.clear();
    click_all(&mut core, &[(300.0, 300.0)]);
    assert_eq!(core.point(&label("A")), Some(pt(300.0, 300.0)));
}

// =============================================================
// Scene: measurements through the engine
// =============================================================

#[test]
fn right_triangle_scene_labels() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)]);
    let labels = texts(&core.scene());
    // AB and BC segment labels, then the CA side label.
    assert_eq!(labels.iter().filter(|t| *t == "5.00 cm").count(), 2);
    assert!(labels.contains(&"7.07 cm".to_owned()));
    assert!(labels.contains(&"90.00°".to_owned()));
    assert_eq!(labels.iter().filter(|t| *t == "45.00°").count(), 2);
    assert!(labels.contains(&"Total Length: 10.00 cm".to_owned()));
}

#[test]
fn dragging_updates_measurements_on_next_scene() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (100.0, 0.0)]);
    assert!(texts(&core.scene()).contains(&format_length(5.0)));
    core.on_pointer_down(pt(100.0, 0.0));
    core.on_pointer_move(pt(200.0, 0.0));
    let labels = texts(&core.scene());
    assert!(labels.contains(&format_length(10.0)));
    assert!(!labels.contains(&format_length(5.0)));
}

#[test]
fn degenerate_triangle_never_renders_nan() {
    let mut core = EngineCore::new();
    click_all(&mut core, &[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
    let labels = texts(&core.scene());
    assert!(labels.iter().all(|t| !t.contains("NaN")));
    assert!(labels.contains(&format_angle(Some(180.0))));
}
