use tracing::debug;

use crate::geometry::{Point, Rectangle};
use crate::gesture::Gesture;
use crate::registry::{RectangleRegistry, Rejected};

/// Pointer input, already reduced to the left button and integer pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(Point),
    Up(Point),
    DoubleClick(Point),
}

/// What a single pointer event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// A drag started at this point.
    Anchored(Point),
    /// The drag produced a new rectangle, already drawn.
    Committed(Rectangle),
    /// The drag overlapped an existing rectangle. Nothing was drawn.
    Rejected(Rejected),
    /// The drag ended without trying to draw (draw mode off, or no anchor).
    Released,
    Ignored,
}

/// Receives draw commands for committed rectangles.
pub trait Canvas {
    fn fill_and_outline_rectangle(&mut self, rect: Rectangle);
}

/// One drawing board: the committed rectangles plus the drag in progress.
#[derive(Debug, Default)]
pub struct DrawingSession {
    registry: RectangleRegistry,
    gesture: Gesture,
}

impl DrawingSession {
    pub fn new() -> Self {
        DrawingSession::default()
    }

    pub fn registry(&self) -> &RectangleRegistry {
        &self.registry
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn handle(
        &mut self,
        event: PointerEvent,
        draw_mode: bool,
        canvas: &mut impl Canvas,
    ) -> GestureOutcome {
        match event {
            PointerEvent::Down(position) => self.pointer_down(position),
            PointerEvent::Up(position) => self.pointer_up(position, draw_mode, canvas),
            PointerEvent::DoubleClick(_) => GestureOutcome::Ignored,
        }
    }

    pub fn pointer_down(&mut self, position: Point) -> GestureOutcome {
        self.gesture.pointer_down(position);
        GestureOutcome::Anchored(position)
    }

    pub fn pointer_up(
        &mut self,
        release: Point,
        draw_mode: bool,
        canvas: &mut impl Canvas,
    ) -> GestureOutcome {
        let Some((anchor, release)) = self.gesture.pointer_up(release, draw_mode) else {
            return GestureOutcome::Released;
        };

        match self.registry.try_commit(anchor, release) {
            Ok(rect) => {
                debug!(
                    ?rect,
                    degenerate = rect.is_degenerate(),
                    total = self.registry.len(),
                    "rectangle committed"
                );
                canvas.fill_and_outline_rectangle(rect);
                GestureOutcome::Committed(rect)
            }
            // silent: no draw, no log
            Err(rejected) => GestureOutcome::Rejected(rejected),
        }
    }
}
