//! Hit-testing: resize handles, resize directions, and pointer-to-room lookup.
//!
//! Two distinct predicates decide a resize. [`contains_handle`] asks whether
//! the pointer is inside the circular zone around any of a room's eight handle
//! anchors. [`resize_direction`] independently tests the pointer against bands
//! around the four edge lines. A pointer can satisfy the first and not the
//! second; in that case no resize starts.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HANDLE_BAND, HANDLE_DIAMETER};
use crate::geom::Point;
use crate::room::{Room, RoomId, RoomStore};

/// Which edge or corner a resize gesture drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeDirection {
    /// Whether the gesture moves the top edge.
    #[must_use]
    pub const fn moves_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    /// Whether the gesture moves the bottom edge.
    #[must_use]
    pub const fn moves_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }

    /// Whether the gesture moves the left edge.
    #[must_use]
    pub const fn moves_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    /// Whether the gesture moves the right edge.
    #[must_use]
    pub const fn moves_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }
}

/// Which part of a room was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Handle(ResizeDirection),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub room_id: RoomId,
    pub part: HitPart,
}

/// The eight handle anchors: four corners, then the four edge midpoints.
#[must_use]
pub fn handle_anchors(room: &Room) -> [Point; 8] {
    let (x, y, w, h) = (room.x, room.y, room.width, room.height);
    [
        Point::new(x, y),
        Point::new(x + w, y),
        Point::new(x, y + h),
        Point::new(x + w, y + h),
        Point::new(x + w / 2, y),
        Point::new(x + w / 2, y + h),
        Point::new(x, y + h / 2),
        Point::new(x + w, y + h / 2),
    ]
}

/// Whether `pt` lies within the circular hit zone of any handle anchor.
#[must_use]
pub fn contains_handle(room: &Room, pt: Point) -> bool {
    // dist <= d / 2  <=>  4 * dist^2 <= d^2
    let diameter_sq = i64::from(HANDLE_DIAMETER) * i64::from(HANDLE_DIAMETER);
    handle_anchors(room)
        .iter()
        .any(|anchor| 4 * anchor.distance_sq(pt) <= diameter_sq)
}

/// Edge or corner selected by `pt`, from its distance to each edge line.
///
/// Corners win over single edges. Returns `None` when the pointer is not
/// within [`HANDLE_BAND`] of any edge line.
#[must_use]
pub fn resize_direction(room: &Room, pt: Point) -> Option<ResizeDirection> {
    let bounds = room.bounds();
    let near = |a: i32, b: i32| a.saturating_sub(b).saturating_abs() <= HANDLE_BAND;
    let on_left = near(pt.x, bounds.x);
    let on_right = near(pt.x, bounds.right());
    let on_top = near(pt.y, bounds.y);
    let on_bottom = near(pt.y, bounds.bottom());

    let dir = match (on_top, on_bottom, on_left, on_right) {
        (true, _, true, _) => ResizeDirection::TopLeft,
        (true, _, _, true) => ResizeDirection::TopRight,
        (_, true, true, _) => ResizeDirection::BottomLeft,
        (_, true, _, true) => ResizeDirection::BottomRight,
        (true, _, _, _) => ResizeDirection::Top,
        (_, true, _, _) => ResizeDirection::Bottom,
        (_, _, true, _) => ResizeDirection::Left,
        (_, _, _, true) => ResizeDirection::Right,
        _ => return None,
    };
    Some(dir)
}

/// Find what `pt` hits, scanning rooms in store order; the first match wins.
///
/// For each room the handle zone is checked before the body. A handle hit
/// with no resize direction falls through to that room's body test.
#[must_use]
pub fn hit_test(pt: Point, rooms: &RoomStore) -> Option<Hit> {
    for room in rooms.iter() {
        if contains_handle(room, pt) {
            if let Some(dir) = resize_direction(room, pt) {
                return Some(Hit { room_id: room.id, part: HitPart::Handle(dir) });
            }
        }
        if room.contains(pt) {
            return Some(Hit { room_id: room.id, part: HitPart::Body });
        }
    }
    None
}
