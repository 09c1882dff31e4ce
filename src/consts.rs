//! Shared numeric constants for the layout engine.

// ── Room geometry ───────────────────────────────────────────────

/// Smallest width or height a committed room may have, in canvas units.
pub const MIN_ROOM_SIZE: i32 = 20;

// ── Hit-testing ─────────────────────────────────────────────────

/// Diameter of the circular hit zone around each handle anchor.
pub const HANDLE_DIAMETER: i32 = 10;

/// Distance from an edge line within which a pointer selects that edge for resizing.
pub const HANDLE_BAND: i32 = 8;

// ── Snapping ────────────────────────────────────────────────────

/// Maximum edge-to-edge distance at which a candidate snaps to a neighbor.
pub const SNAP_THRESHOLD: i32 = 10;

// ── Initial placement ───────────────────────────────────────────

/// First candidate origin (both axes) tried for a new room.
pub const PLACEMENT_ORIGIN: i32 = 50;

/// Diagonal step applied to the candidate origin after each collision.
pub const PLACEMENT_STEP: i32 = 10;

/// Default cap on candidates examined by the placement search.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

// ── Canvas ──────────────────────────────────────────────────────

pub const DEFAULT_CANVAS_WIDTH: i32 = 800;
pub const DEFAULT_CANVAS_HEIGHT: i32 = 600;
