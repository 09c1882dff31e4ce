//! Interaction controller: pointer events in, room mutations and effects out.
//!
//! [`step`] is the whole state machine as one function of the current state
//! and an event. It mutates the room store only through validated commits and
//! reports everything a host needs to know as [`Action`]s; it never calls into
//! a renderer.
//!
//! Per drag frame the pipeline is fixed: build the candidate, snap each axis,
//! clamp (size, then canvas), validate, commit or discard. A rejected frame
//! leaves the room exactly as last committed while the gesture keeps tracking
//! the pointer.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::consts::MIN_ROOM_SIZE;
use crate::engine::Action;
use crate::geom::{Point, Rect, Size};
use crate::hit::{self, HitPart, ResizeDirection};
use crate::input::{InputState, Mode, PointerEvent};
use crate::room::{RoomId, RoomStore};
use crate::snap::{self, GuideLine};
use crate::validate;

/// Owns the current [`InputState`] and feeds events through [`step`].
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InputState,
}

impl InteractionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one pointer event to completion.
    pub fn handle(&mut self, event: PointerEvent, rooms: &mut RoomStore, canvas: Size) -> Vec<Action> {
        let state = std::mem::take(&mut self.state);
        let (next, actions) = step(state, event, rooms, canvas);
        self.state = next;
        actions
    }

    #[must_use]
    pub fn state(&self) -> &InputState {
        &self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    #[must_use]
    pub fn selection(&self) -> Option<RoomId> {
        self.state.selection()
    }

    #[must_use]
    pub fn guides(&self) -> &[GuideLine] {
        self.state.guides()
    }
}

/// Advance the state machine by one event.
pub fn step(state: InputState, event: PointerEvent, rooms: &mut RoomStore, canvas: Size) -> (InputState, Vec<Action>) {
    match (state, event) {
        (InputState::Idle, PointerEvent::Down(pt)) => press(pt, rooms),
        (InputState::Moving { id, offset, guides }, PointerEvent::Drag(pt)) => {
            drag_move(id, offset, &guides, pt, rooms, canvas)
        }
        (InputState::Resizing { id, direction, last, guides }, PointerEvent::Drag(pt)) => {
            drag_resize(id, direction, last, &guides, pt, rooms, canvas)
        }
        (state @ (InputState::Moving { .. } | InputState::Resizing { .. }), PointerEvent::Up(_)) => release(&state),
        (state @ (InputState::Moving { .. } | InputState::Resizing { .. }), PointerEvent::Down(_)) => {
            tracing::debug!(mode = ?state.mode(), "pointer-down during active gesture ignored");
            (state, Vec::new())
        }
        (InputState::Idle, PointerEvent::Drag(_) | PointerEvent::Up(_)) => (InputState::Idle, Vec::new()),
    }
}

// =============================================================
// Transitions
// =============================================================

fn press(pt: Point, rooms: &RoomStore) -> (InputState, Vec<Action>) {
    let Some(hit) = hit::hit_test(pt, rooms) else {
        return (InputState::Idle, Vec::new());
    };
    let Some(room) = rooms.get(&hit.room_id) else {
        return (InputState::Idle, Vec::new());
    };

    match hit.part {
        HitPart::Handle(direction) => {
            tracing::debug!(id = %room.id, ?direction, "resize started");
            let state = InputState::Resizing { id: room.id, direction, last: pt, guides: Vec::new() };
            (state, Vec::new())
        }
        HitPart::Body => {
            tracing::debug!(id = %room.id, "move started");
            let offset = pt.offset_from(Point::new(room.x, room.y));
            let state = InputState::Moving { id: room.id, offset, guides: Vec::new() };
            (state, vec![Action::SelectionChanged(Some(room.id)), Action::RenderNeeded])
        }
    }
}

fn release(state: &InputState) -> (InputState, Vec<Action>) {
    tracing::debug!(mode = ?state.mode(), "gesture ended");
    let mut actions = Vec::new();
    if state.selection().is_some() {
        actions.push(Action::SelectionChanged(None));
    }
    if !state.guides().is_empty() {
        actions.push(Action::GuidesChanged(Vec::new()));
    }
    actions.push(Action::RenderNeeded);
    (InputState::Idle, actions)
}

fn drag_move(
    id: RoomId,
    offset: Point,
    prev_guides: &[GuideLine],
    pt: Point,
    rooms: &mut RoomStore,
    canvas: Size,
) -> (InputState, Vec<Action>) {
    let Some(room) = rooms.get(&id).copied() else {
        return (InputState::Idle, vec![Action::SelectionChanged(None), Action::RenderNeeded]);
    };

    let origin = pt.offset_from(offset);
    let candidate = Rect::new(origin.x, origin.y, room.width, room.height);
    let snapped = snap::snap_rect(rooms, &id, candidate);
    let guides = snapped.guides(canvas);
    let bounds = clamp_to_canvas(snapped.bounds(), canvas);

    let mut actions = Vec::new();
    commit_if_valid(rooms, id, room.bounds(), bounds, canvas, &mut actions);
    push_guides(prev_guides, &guides, &mut actions);
    actions.push(Action::RenderNeeded);

    (InputState::Moving { id, offset, guides }, actions)
}

fn drag_resize(
    id: RoomId,
    direction: ResizeDirection,
    last: Point,
    prev_guides: &[GuideLine],
    pt: Point,
    rooms: &mut RoomStore,
    canvas: Size,
) -> (InputState, Vec<Action>) {
    let Some(room) = rooms.get(&id).copied() else {
        return (InputState::Idle, vec![Action::RenderNeeded]);
    };

    let delta = pt.offset_from(last);
    let candidate = apply_resize(room.bounds(), direction, delta);
    let snapped = snap::snap_rect(rooms, &id, candidate);
    let guides = snapped.guides(canvas);
    let bounds = clamp_to_canvas(enforce_min_size(snapped.bounds(), direction), canvas);

    let mut actions = Vec::new();
    commit_if_valid(rooms, id, room.bounds(), bounds, canvas, &mut actions);
    push_guides(prev_guides, &guides, &mut actions);
    actions.push(Action::RenderNeeded);

    (InputState::Resizing { id, direction, last: pt, guides }, actions)
}

// =============================================================
// Frame pipeline
// =============================================================

/// Move the edges implied by `direction` by the pointer delta.
#[must_use]
pub fn apply_resize(mut bounds: Rect, direction: ResizeDirection, delta: Point) -> Rect {
    if direction.moves_top() {
        bounds.y = bounds.y.saturating_add(delta.y);
        bounds.height = bounds.height.saturating_sub(delta.y);
    }
    if direction.moves_bottom() {
        bounds.height = bounds.height.saturating_add(delta.y);
    }
    if direction.moves_left() {
        bounds.x = bounds.x.saturating_add(delta.x);
        bounds.width = bounds.width.saturating_sub(delta.x);
    }
    if direction.moves_right() {
        bounds.width = bounds.width.saturating_add(delta.x);
    }
    bounds
}

/// Raise width and height to the minimum. When the leading edge is the one
/// being dragged, the opposite edge stays put.
#[must_use]
pub fn enforce_min_size(mut bounds: Rect, direction: ResizeDirection) -> Rect {
    if bounds.width < MIN_ROOM_SIZE {
        if direction.moves_left() {
            bounds.x = bounds.x.saturating_sub(MIN_ROOM_SIZE.saturating_sub(bounds.width));
        }
        bounds.width = MIN_ROOM_SIZE;
    }
    if bounds.height < MIN_ROOM_SIZE {
        if direction.moves_top() {
            bounds.y = bounds.y.saturating_sub(MIN_ROOM_SIZE.saturating_sub(bounds.height));
        }
        bounds.height = MIN_ROOM_SIZE;
    }
    bounds
}

/// Pull the origin back inside the canvas, keeping the size.
///
/// A rectangle larger than the canvas ends up at the origin and still fails
/// validation.
#[must_use]
pub fn clamp_to_canvas(mut bounds: Rect, canvas: Size) -> Rect {
    bounds.x = bounds.x.min(canvas.width.saturating_sub(bounds.width)).max(0);
    bounds.y = bounds.y.min(canvas.height.saturating_sub(bounds.height)).max(0);
    bounds
}

fn commit_if_valid(
    rooms: &mut RoomStore,
    id: RoomId,
    current: Rect,
    candidate: Rect,
    canvas: Size,
    actions: &mut Vec<Action>,
) {
    if let Err(reason) = validate::check(rooms, Some(&id), candidate, canvas) {
        tracing::trace!(%id, ?candidate, %reason, "candidate rejected");
        return;
    }
    if candidate == current {
        return;
    }
    if rooms.commit(&id, candidate) {
        tracing::trace!(%id, ?candidate, "candidate committed");
        actions.push(Action::RoomUpdated { id, bounds: candidate });
    }
}

fn push_guides(prev: &[GuideLine], next: &[GuideLine], actions: &mut Vec<Action>) {
    if prev != next {
        actions.push(Action::GuidesChanged(next.to_vec()));
    }
}
