//! Edge snapping and alignment guides.
//!
//! Snapping runs once per axis. On each axis the candidate's leading and
//! trailing edges are compared against both edges of every other room; the
//! closest pair within [`SNAP_THRESHOLD`] wins and the candidate is shifted so
//! the matched edge lands exactly on the neighbor's edge. Only rooms whose
//! extent on the orthogonal axis strictly overlaps the candidate's are
//! eligible. Snapping moves, it never resizes.
//!
//! Ties go to the first pair encountered in store order (room, then near edge
//! before far edge, then leading before trailing).

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::consts::SNAP_THRESHOLD;
use crate::geom::{Axis, Point, Rect, Size, ranges_overlap};
use crate::room::{Room, RoomId, RoomStore};

/// One axis of a candidate rectangle, plus its orthogonal extent for alignment gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapQuery {
    pub axis: Axis,
    /// Leading-edge coordinate along `axis`.
    pub position: i32,
    /// Extent along `axis`.
    pub size: i32,
    /// Leading-edge coordinate on the orthogonal axis.
    pub cross_position: i32,
    /// Extent on the orthogonal axis.
    pub cross_size: i32,
}

impl SnapQuery {
    /// Query for `rect` along `axis`.
    #[must_use]
    pub const fn for_rect(rect: Rect, axis: Axis) -> Self {
        let cross = axis.orthogonal();
        Self {
            axis,
            position: rect.start(axis),
            size: rect.extent(axis),
            cross_position: rect.start(cross),
            cross_size: rect.extent(cross),
        }
    }
}

/// Outcome of snapping one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapResult {
    pub axis: Axis,
    /// Leading-edge coordinate after snapping (unchanged when not snapped).
    pub position: i32,
    /// Extent along the axis; snapping never changes it.
    pub size: i32,
    pub snapped: bool,
    /// The neighbor edge coordinate the candidate aligned to.
    pub snap_line: i32,
    /// The room that supplied `snap_line`.
    pub neighbor: Option<Room>,
}

impl SnapResult {
    const fn unsnapped(query: SnapQuery) -> Self {
        Self {
            axis: query.axis,
            position: query.position,
            size: query.size,
            snapped: false,
            snap_line: 0,
            neighbor: None,
        }
    }

    /// Guide lines for this axis: the snap line itself plus the neighbor's two
    /// edges on the orthogonal axis. Empty when nothing snapped.
    #[must_use]
    pub fn guides(&self, canvas: Size) -> Vec<GuideLine> {
        if !self.snapped {
            return Vec::new();
        }
        let mut lines = vec![GuideLine::spanning(self.axis, self.snap_line, canvas)];
        if let Some(neighbor) = self.neighbor {
            let cross = self.axis.orthogonal();
            let nb = neighbor.bounds();
            lines.push(GuideLine::spanning(cross, nb.start(cross), canvas));
            lines.push(GuideLine::spanning(cross, nb.end(cross), canvas));
        }
        lines
    }
}

/// Snap one axis of a candidate against every room except `moving`.
#[must_use]
pub fn snap_axis(rooms: &RoomStore, moving: &RoomId, query: SnapQuery) -> SnapResult {
    let axis = query.axis;
    let cross = axis.orthogonal();
    let mut result = SnapResult::unsnapped(query);
    let mut closest = i32::MAX;

    for room in rooms.iter().filter(|r| &r.id != moving) {
        let bounds = room.bounds();
        let aligned = ranges_overlap(query.cross_position, query.cross_size, bounds.start(cross), bounds.extent(cross));
        if !aligned {
            continue;
        }

        for edge in [bounds.start(axis), bounds.end(axis)] {
            let leading = (distance(query.position, edge), edge);
            let trailing = (distance(query.position.saturating_add(query.size), edge), edge.saturating_sub(query.size));
            for (distance, position) in [leading, trailing] {
                if distance <= SNAP_THRESHOLD && distance < closest {
                    closest = distance;
                    result = SnapResult {
                        axis,
                        position,
                        size: query.size,
                        snapped: true,
                        snap_line: edge,
                        neighbor: Some(*room),
                    };
                }
            }
        }
    }

    result
}

const fn distance(a: i32, b: i32) -> i32 {
    a.saturating_sub(b).saturating_abs()
}

/// Per-axis snap results for a candidate rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectSnap {
    pub x: SnapResult,
    pub y: SnapResult,
}

impl RectSnap {
    /// The candidate with both snapped positions applied.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(self.x.position, self.y.position, self.x.size, self.y.size)
    }

    /// Guide lines for both axes, `x` first.
    #[must_use]
    pub fn guides(&self, canvas: Size) -> Vec<GuideLine> {
        let mut lines = self.x.guides(canvas);
        lines.extend(self.y.guides(canvas));
        lines
    }
}

/// Snap both axes of `candidate`. Each axis is gated by the other axis's
/// unsnapped extent.
#[must_use]
pub fn snap_rect(rooms: &RoomStore, moving: &RoomId, candidate: Rect) -> RectSnap {
    RectSnap {
        x: snap_axis(rooms, moving, SnapQuery::for_rect(candidate, Axis::X)),
        y: snap_axis(rooms, moving, SnapQuery::for_rect(candidate, Axis::Y)),
    }
}

/// A full-canvas alignment line.
///
/// `axis` names the axis `coordinate` is measured on: an `X` guide is a
/// vertical line at `x = coordinate`, a `Y` guide a horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideLine {
    pub axis: Axis,
    pub coordinate: i32,
    /// Length of the line, i.e. the canvas extent on the orthogonal axis.
    pub span: i32,
}

impl GuideLine {
    /// A line at `coordinate` on `axis`, spanning the whole canvas.
    #[must_use]
    pub const fn spanning(axis: Axis, coordinate: i32, canvas: Size) -> Self {
        Self { axis, coordinate, span: canvas.along(axis.orthogonal()) }
    }

    /// Start and end points of the segment.
    #[must_use]
    pub const fn endpoints(&self) -> (Point, Point) {
        match self.axis {
            Axis::X => (Point::new(self.coordinate, 0), Point::new(self.coordinate, self.span)),
            Axis::Y => (Point::new(0, self.coordinate), Point::new(self.span, self.coordinate)),
        }
    }
}
