//! Placement validation: the single gate every committed mutation passes.
//!
//! A candidate is valid when it lies inside the canvas, meets the minimum
//! size, and shares no positive area with any other room. Edge-touching is
//! allowed. Validation never mutates anything.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::consts::MIN_ROOM_SIZE;
use crate::geom::{Rect, Size};
use crate::room::{RoomId, RoomStore};

/// Why a candidate rectangle was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("candidate {candidate:?} is outside the {}x{} canvas", canvas.width, canvas.height)]
    OutOfBounds { candidate: Rect, canvas: Size },
    #[error("candidate {candidate:?} is smaller than the minimum room size")]
    TooSmall { candidate: Rect },
    #[error("candidate overlaps room {other}")]
    Overlap { other: RoomId },
}

/// Check `candidate` against the canvas and every room except `exclude`.
///
/// # Errors
///
/// Returns the first reason the candidate cannot be committed.
pub fn check(rooms: &RoomStore, exclude: Option<&RoomId>, candidate: Rect, canvas: Size) -> Result<(), PlacementError> {
    if !candidate.is_within(canvas) {
        return Err(PlacementError::OutOfBounds { candidate, canvas });
    }
    if candidate.width < MIN_ROOM_SIZE || candidate.height < MIN_ROOM_SIZE {
        return Err(PlacementError::TooSmall { candidate });
    }
    let overlap = rooms
        .iter()
        .filter(|r| Some(&r.id) != exclude)
        .find(|r| r.bounds().intersects(&candidate));
    if let Some(other) = overlap {
        return Err(PlacementError::Overlap { other: other.id });
    }
    Ok(())
}

/// Boolean form of [`check`].
#[must_use]
pub fn is_valid(rooms: &RoomStore, exclude: Option<&RoomId>, candidate: Rect, canvas: Size) -> bool {
    check(rooms, exclude, candidate, canvas).is_ok()
}
