use super::*;
use crate::geom::Axis;
use crate::room::Room;

const CANVAS: Size = Size::new(800, 600);

// =============================================================
// Helpers
// =============================================================

fn setup(rooms: &[Room]) -> (InteractionController, RoomStore) {
    let mut store = RoomStore::new();
    for r in rooms {
        store.insert(*r);
    }
    (InteractionController::new(), store)
}

fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn bounds(store: &RoomStore, id: &RoomId) -> Rect {
    store.get(id).map(Room::bounds).unwrap_or(Rect::new(0, 0, 0, 0))
}

fn down(ctl: &mut InteractionController, store: &mut RoomStore, x: i32, y: i32) -> Vec<Action> {
    ctl.handle(PointerEvent::Down(pt(x, y)), store, CANVAS)
}

fn drag(ctl: &mut InteractionController, store: &mut RoomStore, x: i32, y: i32) -> Vec<Action> {
    ctl.handle(PointerEvent::Drag(pt(x, y)), store, CANVAS)
}

fn up(ctl: &mut InteractionController, store: &mut RoomStore, x: i32, y: i32) -> Vec<Action> {
    ctl.handle(PointerEvent::Up(pt(x, y)), store, CANVAS)
}

fn has_room_updated(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RoomUpdated { .. }))
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.contains(&Action::RenderNeeded)
}

// =============================================================
// step: pointer-down
// =============================================================

#[test]
fn step_press_on_empty_canvas_stays_idle() {
    let mut store = RoomStore::new();
    let (state, actions) = step(InputState::Idle, PointerEvent::Down(pt(10, 10)), &mut store, CANVAS);
    assert_eq!(state, InputState::Idle);
    assert!(actions.is_empty());
}

#[test]
fn press_on_body_starts_moving_and_selects() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);

    let actions = down(&mut ctl, &mut store, 130, 140);
    assert_eq!(ctl.mode(), Mode::Moving);
    assert_eq!(ctl.selection(), Some(a.id));
    assert_eq!(actions, vec![Action::SelectionChanged(Some(a.id)), Action::RenderNeeded]);
    assert_eq!(ctl.state(), &InputState::Moving { id: a.id, offset: pt(30, 40), guides: Vec::new() });
}

#[test]
fn press_on_corner_anchor_starts_resizing() {
    let a = Room::new(0, 0, 50, 50);
    let (mut ctl, mut store) = setup(&[a]);

    let actions = down(&mut ctl, &mut store, 50, 50);
    assert!(actions.is_empty());
    assert_eq!(
        ctl.state(),
        &InputState::Resizing { id: a.id, direction: ResizeDirection::BottomRight, last: pt(50, 50), guides: Vec::new() }
    );
    assert!(ctl.selection().is_none());
}

#[test]
fn press_during_gesture_is_ignored() {
    let a = Room::new(100, 100, 100, 100);
    let b = Room::new(400, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 150, 150);
    let actions = down(&mut ctl, &mut store, 450, 150);
    assert!(actions.is_empty());
    assert_eq!(ctl.selection(), Some(a.id));
}

#[test]
fn drag_and_up_while_idle_do_nothing() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);

    assert!(drag(&mut ctl, &mut store, 150, 150).is_empty());
    assert!(up(&mut ctl, &mut store, 150, 150).is_empty());
    assert_eq!(bounds(&store, &a.id), a.bounds());
    assert_eq!(ctl.mode(), Mode::Idle);
}

// =============================================================
// Moving
// =============================================================

#[test]
fn move_commits_pointer_minus_offset() {
    let a = Room::new(100, 100, 50, 50);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 120, 120);
    let actions = drag(&mut ctl, &mut store, 220, 170);
    assert_eq!(bounds(&store, &a.id), Rect::new(200, 150, 50, 50));
    assert!(actions.contains(&Action::RoomUpdated { id: a.id, bounds: Rect::new(200, 150, 50, 50) }));
    assert!(has_render_needed(&actions));
}

#[test]
fn move_snaps_left_edge_and_emits_guides() {
    let a = Room::new(0, 0, 100, 100);
    let b = Room::new(300, 0, 50, 50);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 320, 20);
    let actions = drag(&mut ctl, &mut store, 128, 20);

    assert_eq!(bounds(&store, &b.id), Rect::new(100, 0, 50, 50));
    let expected = vec![
        GuideLine { axis: Axis::X, coordinate: 100, span: 600 },
        GuideLine { axis: Axis::Y, coordinate: 0, span: 800 },
        GuideLine { axis: Axis::Y, coordinate: 100, span: 800 },
    ];
    assert_eq!(ctl.guides(), expected.as_slice());
    assert!(actions.contains(&Action::GuidesChanged(expected)));
}

#[test]
fn unchanged_guides_are_not_re_emitted() {
    let a = Room::new(0, 0, 100, 100);
    let b = Room::new(300, 0, 50, 50);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 320, 20);
    drag(&mut ctl, &mut store, 128, 20);
    let actions = drag(&mut ctl, &mut store, 126, 20);
    assert!(!actions.iter().any(|a| matches!(a, Action::GuidesChanged(_))));
    assert!(has_render_needed(&actions));
}

#[test]
fn move_onto_overlap_is_rejected() {
    let a = Room::new(0, 0, 50, 50);
    let b = Room::new(200, 200, 50, 50);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 220, 220);
    let actions = drag(&mut ctl, &mut store, 30, 30);
    assert_eq!(bounds(&store, &b.id), Rect::new(200, 200, 50, 50));
    assert!(!has_room_updated(&actions));
    assert_eq!(ctl.mode(), Mode::Moving);
}

#[test]
fn move_resumes_after_rejected_frame() {
    let a = Room::new(0, 0, 50, 50);
    let b = Room::new(200, 200, 50, 50);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 220, 220);
    drag(&mut ctl, &mut store, 30, 30);
    drag(&mut ctl, &mut store, 320, 320);
    assert_eq!(bounds(&store, &b.id), Rect::new(300, 300, 50, 50));
}

#[test]
fn move_is_clamped_into_canvas() {
    let a = Room::new(100, 100, 50, 50);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 120, 120);
    drag(&mut ctl, &mut store, 1000, -40);
    assert_eq!(bounds(&store, &a.id), Rect::new(750, 0, 50, 50));
}

#[test]
fn move_to_same_spot_commits_nothing() {
    let a = Room::new(100, 100, 50, 50);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 120, 120);
    let actions = drag(&mut ctl, &mut store, 120, 120);
    assert!(!has_room_updated(&actions));
    assert!(has_render_needed(&actions));
}

// =============================================================
// Resizing
// =============================================================

#[test]
fn resize_bottom_right_uses_incremental_deltas() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 200, 200);
    drag(&mut ctl, &mut store, 210, 220);
    assert_eq!(bounds(&store, &a.id), Rect::new(100, 100, 110, 120));
    drag(&mut ctl, &mut store, 215, 220);
    assert_eq!(bounds(&store, &a.id), Rect::new(100, 100, 115, 120));
}

#[test]
fn resize_top_moves_origin_and_height() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 150, 100);
    drag(&mut ctl, &mut store, 150, 80);
    assert_eq!(bounds(&store, &a.id), Rect::new(100, 80, 100, 120));
}

#[test]
fn resize_right_clamps_to_minimum_width() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 200, 150);
    drag(&mut ctl, &mut store, 100, 150);
    assert_eq!(bounds(&store, &a.id), Rect::new(100, 100, 20, 100));
}

#[test]
fn resize_left_past_minimum_keeps_right_edge() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 100, 150);
    drag(&mut ctl, &mut store, 250, 150);
    assert_eq!(bounds(&store, &a.id), Rect::new(180, 100, 20, 100));
}

#[test]
fn resize_corner_shrinks_to_minimum() {
    let a = Room::new(0, 0, 50, 50);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 50, 50);
    drag(&mut ctl, &mut store, 10, 10);
    assert_eq!(bounds(&store, &a.id), Rect::new(0, 0, 20, 20));
}

#[test]
fn resize_into_neighbor_is_rejected() {
    let a = Room::new(0, 0, 100, 100);
    let b = Room::new(150, 0, 100, 100);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 150, 50);
    let actions = drag(&mut ctl, &mut store, 50, 50);
    assert_eq!(bounds(&store, &b.id), Rect::new(150, 0, 100, 100));
    assert!(!has_room_updated(&actions));
}

#[test]
fn resize_snap_shifts_position_without_resizing() {
    let a = Room::new(0, 0, 100, 100);
    let b = Room::new(150, 0, 100, 100);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 150, 50);
    drag(&mut ctl, &mut store, 90, 50);
    // Left edge candidate 90 snaps to a's right edge; the width stays 160.
    assert_eq!(bounds(&store, &b.id), Rect::new(100, 0, 160, 100));
}

#[test]
fn resize_anchor_advances_even_when_rejected() {
    let a = Room::new(0, 0, 100, 100);
    let b = Room::new(150, 0, 100, 100);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 150, 50);
    drag(&mut ctl, &mut store, 50, 50);
    // The next delta is measured from the rejected pointer position.
    drag(&mut ctl, &mut store, 80, 50);
    assert_eq!(bounds(&store, &b.id), Rect::new(180, 0, 70, 100));
}

// =============================================================
// Release
// =============================================================

#[test]
fn release_clears_selection_and_guides() {
    let a = Room::new(0, 0, 100, 100);
    let b = Room::new(300, 0, 50, 50);
    let (mut ctl, mut store) = setup(&[a, b]);

    down(&mut ctl, &mut store, 320, 20);
    drag(&mut ctl, &mut store, 128, 20);
    let actions = up(&mut ctl, &mut store, 128, 20);

    assert_eq!(
        actions,
        vec![Action::SelectionChanged(None), Action::GuidesChanged(Vec::new()), Action::RenderNeeded]
    );
    assert_eq!(ctl.mode(), Mode::Idle);
    assert!(ctl.selection().is_none());
    assert!(ctl.guides().is_empty());
}

#[test]
fn release_after_resize_returns_to_idle() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);

    down(&mut ctl, &mut store, 200, 200);
    let actions = up(&mut ctl, &mut store, 200, 200);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(ctl.mode(), Mode::Idle);
}

// =============================================================
// Frame pipeline helpers
// =============================================================

#[test]
fn apply_resize_per_direction() {
    let r = Rect::new(100, 100, 100, 100);
    let d = pt(10, 20);
    assert_eq!(apply_resize(r, ResizeDirection::Top, d), Rect::new(100, 120, 100, 80));
    assert_eq!(apply_resize(r, ResizeDirection::Bottom, d), Rect::new(100, 100, 100, 120));
    assert_eq!(apply_resize(r, ResizeDirection::Left, d), Rect::new(110, 100, 90, 100));
    assert_eq!(apply_resize(r, ResizeDirection::Right, d), Rect::new(100, 100, 110, 100));
    assert_eq!(apply_resize(r, ResizeDirection::TopLeft, d), Rect::new(110, 120, 90, 80));
    assert_eq!(apply_resize(r, ResizeDirection::TopRight, d), Rect::new(100, 120, 110, 80));
    assert_eq!(apply_resize(r, ResizeDirection::BottomLeft, d), Rect::new(110, 100, 90, 120));
    assert_eq!(apply_resize(r, ResizeDirection::BottomRight, d), Rect::new(100, 100, 110, 120));
}

#[test]
fn enforce_min_size_pins_trailing_edge_for_leading_drags() {
    let r = Rect::new(100, 100, 5, -10);
    assert_eq!(enforce_min_size(r, ResizeDirection::TopLeft), Rect::new(85, 70, 20, 20));
    assert_eq!(enforce_min_size(r, ResizeDirection::BottomRight), Rect::new(100, 100, 20, 20));
}

#[test]
fn clamp_to_canvas_keeps_size() {
    assert_eq!(clamp_to_canvas(Rect::new(-5, 590, 50, 50), CANVAS), Rect::new(0, 550, 50, 50));
    assert_eq!(clamp_to_canvas(Rect::new(10, 10, 50, 50), CANVAS), Rect::new(10, 10, 50, 50));
    assert_eq!(clamp_to_canvas(Rect::new(10, 10, 900, 50), CANVAS), Rect::new(0, 10, 900, 50));
}

// =============================================================
// Extreme pointer positions
// =============================================================

#[test]
fn move_to_extreme_pointer_clamps_into_canvas() {
    let a = Room::new(100, 100, 50, 50);
    let (mut ctl, mut store) = setup(&[a]);
    down(&mut ctl, &mut store, 120, 120);

    drag(&mut ctl, &mut store, i32::MAX, i32::MAX);
    assert_eq!(bounds(&store, &a.id), Rect::new(750, 550, 50, 50));

    drag(&mut ctl, &mut store, i32::MIN, i32::MIN);
    assert_eq!(bounds(&store, &a.id), Rect::new(0, 0, 50, 50));
}

#[test]
fn resize_to_extreme_pointer_is_rejected_then_recovers() {
    let a = Room::new(100, 100, 100, 100);
    let (mut ctl, mut store) = setup(&[a]);
    down(&mut ctl, &mut store, 200, 200);
    assert_eq!(ctl.mode(), Mode::Resizing);

    let actions = drag(&mut ctl, &mut store, i32::MAX, i32::MAX);
    assert!(!has_room_updated(&actions));
    assert_eq!(bounds(&store, &a.id), Rect::new(100, 100, 100, 100));

    drag(&mut ctl, &mut store, i32::MIN, i32::MIN);
    assert_eq!(bounds(&store, &a.id), Rect::new(100, 100, 20, 20));
}
