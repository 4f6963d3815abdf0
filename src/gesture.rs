use crate::geometry::Point;

/// Press/release tracking for a single drag.
///
/// `None` is the idle state; `Some(anchor)` means the button went down at
/// `anchor` and the matching release has not arrived yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gesture {
    anchor: Option<Point>,
}

impl Gesture {
    pub fn new() -> Self {
        Gesture { anchor: None }
    }

    #[cfg(test)]
    pub(crate) fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn is_anchored(&self) -> bool {
        self.anchor.is_some()
    }

    /// Records the anchor whether or not draw mode is on. A repeated press
    /// replaces the previous anchor.
    pub fn pointer_down(&mut self, position: Point) {
        self.anchor = Some(position);
    }

    /// Ends the drag and returns the corners to commit, if any.
    ///
    /// The gesture is idle afterwards, whatever the result.
    pub fn pointer_up(&mut self, release: Point, draw_mode: bool) -> Option<(Point, Point)> {
        let anchor = self.anchor.take()?;
        draw_mode.then_some((anchor, release))
    }
}
