// src/geometry.rs
// Pure integer geometry, no toolkit types here.

/// 屏幕坐标点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Rounds a toolkit position to the nearest pixel.
    pub fn from_f64(x: f64, y: f64) -> Self {
        Point { x: x.round() as i32, y: y.round() as i32 }
    }
}

/// 矩形结构体，总是以左上角 + 宽高的规范形式保存
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Rectangle { left, top, width, height }
    }

    /// Builds the canonical rectangle spanned by two arbitrary corners.
    ///
    /// Each axis is ordered on its own, so the drag may start from any corner.
    /// Equal coordinates give a zero width or height.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Rectangle {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: a.x.abs_diff(b.x),
            height: a.y.abs_diff(b.y),
        }
    }

    pub fn right(&self) -> i64 {
        self.left as i64 + self.width as i64
    }

    pub fn bottom(&self) -> i64 {
        self.top as i64 + self.height as i64
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Open-interval overlap on both axes: touching edges do not intersect.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        (self.left as i64) < other.right()
            && (other.left as i64) < self.right()
            && (self.top as i64) < other.bottom()
            && (other.top as i64) < self.bottom()
    }
}
