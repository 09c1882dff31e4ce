//! Interaction engine for a 2D floor-plan editor.
//!
//! Rooms are axis-aligned rectangles on a bounded canvas. Users add rooms,
//! then drag them around or resize them by their handles; while dragging,
//! edges snap to aligned neighbors and guide lines show the alignment. Every
//! committed change keeps rooms inside the canvas, at least 20x20, and free of
//! overlap. The crate owns only geometry and state; drawing is left to a
//! [`render::RenderSink`] supplied by the host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::Session`] (testable core), [`engine::Editor`] host wrapper, and [`engine::Action`] effects |
//! | [`controller`] | Select/move/resize state machine |
//! | [`room`] | Room model, ordered store, and initial placement |
//! | [`hit`] | Handle and body hit-testing |
//! | [`snap`] | Per-axis edge snapping and guide lines |
//! | [`validate`] | In-bounds, minimum-size, and no-overlap checks |
//! | [`input`] | Pointer events and gesture states |
//! | [`geom`] | Integer points, sizes, rectangles, and axes |
//! | [`render`] | Frames handed to renderers and the sink trait |
//! | [`script`] | JSON-lines command scripts for headless hosts |
//! | [`config`] | Environment configuration |
//! | [`consts`] | Shared numeric constants (minimum size, handle radii, snap threshold, etc.) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod room;
pub mod script;
pub mod snap;
pub mod validate;
