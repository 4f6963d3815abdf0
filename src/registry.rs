use thiserror::Error;

use crate::geometry::{Point, Rectangle};

/// The candidate overlapped a rectangle that is already on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rectangle {candidate:?} overlaps already drawn rectangle {existing:?}")]
pub struct Rejected {
    pub candidate: Rectangle,
    pub existing: Rectangle,
}

/// Every rectangle committed during the session, in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectangleRegistry {
    rectangles: Vec<Rectangle>,
}

impl RectangleRegistry {
    pub fn new() -> Self {
        RectangleRegistry { rectangles: Vec::new() }
    }

    /// Normalizes the two corners and stores the result unless it overlaps
    /// a committed rectangle. Nothing is stored on rejection.
    pub fn try_commit(&mut self, anchor: Point, release: Point) -> Result<Rectangle, Rejected> {
        let candidate = Rectangle::from_corners(anchor, release);

        if let Some(existing) = self.rectangles.iter().find(|r| r.intersects(&candidate)) {
            return Err(Rejected { candidate, existing: *existing });
        }

        self.rectangles.push(candidate);
        Ok(candidate)
    }

    pub fn len(&self) -> usize {
        self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rectangles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.rectangles.iter()
    }

    pub fn as_slice(&self) -> &[Rectangle] {
        &self.rectangles
    }
}
