//! Render hand-off: the read-only frame a renderer draws, and the sink trait.
//!
//! The engine has no drawing code. After every operation that returns
//! [`crate::engine::Action::RenderNeeded`] the host captures a [`Frame`] and
//! passes it to a [`RenderSink`]. Frames are plain serializable values, so a
//! sink can draw them, log them, or ship them elsewhere.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::geom::{Point, Size};
use crate::hit;
use crate::room::{Room, RoomId};
use crate::snap::GuideLine;

/// Everything needed to draw one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomView {
    pub id: RoomId,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub selected: bool,
    /// Size caption, e.g. `"120 x 80"`.
    pub label: String,
    /// Handle anchors: corners, then edge midpoints.
    pub handles: Vec<Point>,
}

impl RoomView {
    #[must_use]
    pub fn new(room: &Room, selected: bool) -> Self {
        Self {
            id: room.id,
            x: room.x,
            y: room.y,
            width: room.width,
            height: room.height,
            selected,
            label: room.dimension_label(),
            handles: hit::handle_anchors(room).to_vec(),
        }
    }
}

/// A complete scene: rooms in draw order, then guide lines on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub canvas: Size,
    pub rooms: Vec<RoomView>,
    pub guides: Vec<GuideLine>,
}

impl Frame {
    #[must_use]
    pub fn capture(rooms: &[Room], selected: Option<RoomId>, guides: &[GuideLine], canvas: Size) -> Self {
        Self {
            canvas,
            rooms: rooms
                .iter()
                .map(|r| RoomView::new(r, selected == Some(r.id)))
                .collect(),
            guides: guides.to_vec(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("render sink write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("frame encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives frames to draw.
pub trait RenderSink {
    /// Draw `frame`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the frame could not be delivered.
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// Writes each frame as one line of JSON.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.out, frame)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every frame in memory.
#[derive(Debug, Default)]
pub struct FrameLog {
    pub frames: Vec<Frame>,
}

impl RenderSink for FrameLog {
    fn render(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
