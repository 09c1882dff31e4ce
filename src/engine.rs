use crate::config::EditorConfig;
use crate::controller::InteractionController;
use crate::geom::{Point, Rect, Size};
use crate::input::{Mode, PointerEvent};
use crate::render::{Frame, RenderError, RenderSink};
use crate::room::{AddRoomError, Room, RoomId, RoomStore};
use crate::script::Command;
use crate::snap::GuideLine;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Effects returned from session operations for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RoomAdded(Room),
    RoomUpdated { id: RoomId, bounds: Rect },
    SelectionChanged(Option<RoomId>),
    GuidesChanged(Vec<GuideLine>),
    RenderNeeded,
}

/// One editing session: a room store, its interaction controller, and the
/// current canvas size.
///
/// Separated from `Editor` so it can be tested without a render sink.
#[derive(Debug, Clone)]
pub struct Session {
    rooms: RoomStore,
    controller: InteractionController,
    canvas: Size,
    max_placement_attempts: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}

impl Session {
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            rooms: RoomStore::new(),
            controller: InteractionController::new(),
            canvas: config.canvas,
            max_placement_attempts: config.max_placement_attempts,
        }
    }

    // --- Commands ---

    /// Add a room of the requested size at the first free position.
    ///
    /// # Errors
    ///
    /// See [`RoomStore::add_room`].
    pub fn add_room(&mut self, width: i32, height: i32) -> Result<Vec<Action>, AddRoomError> {
        let room = self.rooms.add_room(width, height, self.canvas, self.max_placement_attempts)?;
        Ok(vec![Action::RoomAdded(room), Action::RenderNeeded])
    }

    /// Update the canvas size. Later frames validate against the new size.
    ///
    /// A non-positive size is ignored and requests no render.
    pub fn set_viewport(&mut self, width: i32, height: i32) -> Vec<Action> {
        if width <= 0 || height <= 0 {
            tracing::warn!(width, height, "viewport ignored: size must be positive");
            return Vec::new();
        }
        self.canvas = Size::new(width, height);
        tracing::debug!(width, height, "viewport changed");
        vec![Action::RenderNeeded]
    }

    // --- Input events ---

    pub fn handle(&mut self, event: PointerEvent) -> Vec<Action> {
        self.controller.handle(event, &mut self.rooms, self.canvas)
    }

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.handle(PointerEvent::Down(pt))
    }

    pub fn on_pointer_drag(&mut self, pt: Point) -> Vec<Action> {
        self.handle(PointerEvent::Drag(pt))
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.handle(PointerEvent::Up(pt))
    }

    // --- Queries ---

    #[must_use]
    pub fn rooms(&self) -> &RoomStore {
        &self.rooms
    }

    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    #[must_use]
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// The room currently being moved, if any.
    #[must_use]
    pub fn selection(&self) -> Option<RoomId> {
        self.controller.selection()
    }

    #[must_use]
    pub fn guides(&self) -> &[GuideLine] {
        self.controller.guides()
    }

    /// Snapshot of everything a renderer draws.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::capture(self.rooms.as_slice(), self.selection(), self.guides(), self.canvas)
    }
}

/// A session bound to a render sink.
///
/// Renders once on open and again after every operation that asks for it.
pub struct Editor<S: RenderSink> {
    sink: S,
    pub session: Session,
}

impl<S: RenderSink> Editor<S> {
    /// Open an empty session and render its first frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sink fails to render.
    pub fn open(config: &EditorConfig, sink: S) -> Result<Self, RenderError> {
        let mut editor = Self { sink, session: Session::new(config) };
        tracing::info!(width = config.canvas.width, height = config.canvas.height, "session opened");
        editor.render()?;
        Ok(editor)
    }

    /// Run one script command against the session.
    ///
    /// A failed room addition is logged and skipped; it changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sink fails to render.
    pub fn apply(&mut self, command: &Command) -> Result<Vec<Action>, RenderError> {
        let actions = match *command {
            Command::AddRoom { width, height } => match self.session.add_room(width, height) {
                Ok(actions) => actions,
                Err(e) => {
                    tracing::warn!(error = %e, "add_room skipped");
                    Vec::new()
                }
            },
            Command::Down { x, y } => self.session.on_pointer_down(Point::new(x, y)),
            Command::Drag { x, y } => self.session.on_pointer_drag(Point::new(x, y)),
            Command::Up { x, y } => self.session.on_pointer_up(Point::new(x, y)),
            Command::Viewport { width, height } => self.session.set_viewport(width, height),
        };
        if actions.contains(&Action::RenderNeeded) {
            self.render()?;
        }
        Ok(actions)
    }

    /// Push the current frame to the sink.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the sink fails to render.
    pub fn render(&mut self) -> Result<(), RenderError> {
        self.sink.render(&self.session.frame())
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
