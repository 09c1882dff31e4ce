//! Input model: pointer events and the gesture state machine's states.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. Each active variant carries everything needed to turn the next
//! drag event into a candidate rectangle, plus the guide lines produced by the
//! most recent frame.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::hit::ResizeDirection;
use crate::room::RoomId;
use crate::snap::GuideLine;

/// A pointer event in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Drag(Point),
    Up(Point),
}

impl PointerEvent {
    /// Pointer position carried by the event.
    #[must_use]
    pub const fn point(self) -> Point {
        match self {
            Self::Down(pt) | Self::Drag(pt) | Self::Up(pt) => pt,
        }
    }
}

/// Coarse gesture mode, for hosts that only need to pick a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Moving,
    Resizing,
}

/// State of the interaction state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging a room by its body. The room is selected.
    Moving {
        /// Room being moved.
        id: RoomId,
        /// Pointer position minus room origin at pointer-down.
        offset: Point,
        /// Guide lines from the latest drag frame.
        guides: Vec<GuideLine>,
    },
    /// The user is dragging one edge or corner of a room.
    Resizing {
        /// Room being resized.
        id: RoomId,
        /// Edge or corner being dragged.
        direction: ResizeDirection,
        /// Pointer position at the previous event; deltas are incremental.
        last: Point,
        /// Guide lines from the latest drag frame.
        guides: Vec<GuideLine>,
    },
}

impl InputState {
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::Idle,
            Self::Moving { .. } => Mode::Moving,
            Self::Resizing { .. } => Mode::Resizing,
        }
    }

    /// The selected room. Only a room being moved counts as selected.
    #[must_use]
    pub const fn selection(&self) -> Option<RoomId> {
        match self {
            Self::Moving { id, .. } => Some(*id),
            Self::Idle | Self::Resizing { .. } => None,
        }
    }

    /// Guide lines to draw for the current frame.
    #[must_use]
    pub fn guides(&self) -> &[GuideLine] {
        match self {
            Self::Idle => &[],
            Self::Moving { guides, .. } | Self::Resizing { guides, .. } => guides,
        }
    }
}
