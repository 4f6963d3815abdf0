//! # rectboard
//! Rectangle bookkeeping for a full-screen drawing board: drags become
//! canonical rectangles, and a rectangle is only kept if it overlaps nothing
//! already drawn.

pub mod config;
pub mod geometry;
pub mod gesture;
pub mod logger;
pub mod registry;
pub mod session;

pub use geometry::{Point, Rectangle};
pub use registry::{RectangleRegistry, Rejected};
pub use session::{Canvas, DrawingSession, GestureOutcome, PointerEvent};
