//! Room model and the ordered in-memory store that owns every room.
//!
//! `Room` is a plain value: an id plus integer bounds. Selection and other
//! gesture state live in the interaction controller, never on the room.
//! `RoomStore` keeps rooms in insertion order, which is also draw order and
//! the tie-break order for hit-testing and snapping.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{MIN_ROOM_SIZE, PLACEMENT_ORIGIN, PLACEMENT_STEP};
use crate::geom::{Point, Rect, Size};

/// Unique identifier for a room.
pub type RoomId = Uuid;

/// An axis-aligned room on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for this room.
    pub id: RoomId,
    /// Left edge in canvas units.
    pub x: i32,
    /// Top edge in canvas units.
    pub y: i32,
    /// Width in canvas units, never below [`MIN_ROOM_SIZE`].
    pub width: i32,
    /// Height in canvas units, never below [`MIN_ROOM_SIZE`].
    pub height: i32,
}

impl Room {
    /// Create a room with a fresh id. Sizes below the minimum are raised to it.
    #[must_use]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            width: width.max(MIN_ROOM_SIZE),
            height: height.max(MIN_ROOM_SIZE),
        }
    }

    /// Bounding rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Whether the point lies inside or on the border of the room.
    #[must_use]
    pub const fn contains(&self, pt: Point) -> bool {
        self.bounds().contains(pt)
    }

    /// Human-readable size, e.g. `"120 x 80"`.
    #[must_use]
    pub fn dimension_label(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddRoomError {
    #[error("room size must be positive, got {width}x{height}")]
    NonPositiveSize { width: i32, height: i32 },
    #[error("no free position for a {width}x{height} room after {attempts} attempts")]
    NoSpace { width: i32, height: i32, attempts: u32 },
}

/// Ordered store of rooms.
#[derive(Debug, Clone, Default)]
pub struct RoomStore {
    rooms: Vec<Room>,
}

impl RoomStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Append a room as-is, without placement checks.
    pub fn insert(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Create a room of the requested size at the first free spot.
    ///
    /// Candidates start at `(50, 50)` and step diagonally by `(10, 10)` past
    /// every collision. The walk ends with [`AddRoomError::NoSpace`] once a
    /// candidate would leave the canvas or `max_attempts` candidates have been
    /// examined.
    ///
    /// # Errors
    ///
    /// `NonPositiveSize` if either dimension is zero or negative, `NoSpace`
    /// if the room cannot fit past the origin or the search finds no free
    /// candidate.
    pub fn add_room(&mut self, width: i32, height: i32, canvas: Size, max_attempts: u32) -> Result<Room, AddRoomError> {
        if width <= 0 || height <= 0 {
            return Err(AddRoomError::NonPositiveSize { width, height });
        }
        let width = width.max(MIN_ROOM_SIZE);
        let height = height.max(MIN_ROOM_SIZE);
        let max_width = canvas.width.saturating_sub(PLACEMENT_ORIGIN);
        let max_height = canvas.height.saturating_sub(PLACEMENT_ORIGIN);
        if width > max_width || height > max_height {
            tracing::warn!(width, height, canvas = ?canvas, "room cannot fit past the placement origin");
            return Err(AddRoomError::NoSpace { width, height, attempts: 0 });
        }

        let mut candidate = Rect::new(PLACEMENT_ORIGIN, PLACEMENT_ORIGIN, width, height);
        for attempt in 1..=max_attempts {
            if !candidate.is_within(canvas) {
                tracing::warn!(width, height, attempt, "placement search left the canvas");
                return Err(AddRoomError::NoSpace { width, height, attempts: attempt });
            }
            if self.rooms.iter().any(|r| r.bounds().intersects(&candidate)) {
                candidate.x += PLACEMENT_STEP;
                candidate.y += PLACEMENT_STEP;
                continue;
            }

            let room = Room::new(candidate.x, candidate.y, width, height);
            self.insert(room);
            tracing::info!(id = %room.id, x = room.x, y = room.y, width, height, "room added");
            return Ok(room);
        }

        tracing::warn!(width, height, max_attempts, "placement search exhausted its attempts");
        Err(AddRoomError::NoSpace { width, height, attempts: max_attempts })
    }

    /// Replace a room's bounds. Returns false if the room doesn't exist.
    ///
    /// No validation happens here; callers commit only validated candidates.
    pub fn commit(&mut self, id: &RoomId, bounds: Rect) -> bool {
        let Some(room) = self.rooms.iter_mut().find(|r| &r.id == id) else {
            return false;
        };
        room.x = bounds.x;
        room.y = bounds.y;
        room.width = bounds.width;
        room.height = bounds.height;
        true
    }

    /// Return a room by id.
    #[must_use]
    pub fn get(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    /// Rooms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Rooms in insertion order, as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Room] {
        &self.rooms
    }

    /// Number of rooms in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if the store contains no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
