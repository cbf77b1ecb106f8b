use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair. Negative components are allowed (`-1` is "unbounded"
/// for viewport caps).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle; `right`/`bottom` are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle::from_ltrb(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    /// Common part of both rectangles, or the empty rectangle when they are disjoint.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right >= left && bottom >= top {
            Rectangle::from_ltrb(left, top, right, bottom)
        } else {
            Rectangle::default()
        }
    }

    /// True when the interiors overlap; touching edges do not count.
    pub fn intersects_with(&self, other: &Rectangle) -> bool {
        other.left() < self.right()
            && self.left() < other.right()
            && other.top() < self.bottom()
            && self.top() < other.bottom()
    }

    /// Grow by `dx` on the left and right and `dy` on the top and bottom;
    /// negative amounts shrink.
    pub fn inflate(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle::new(
            self.x - dx,
            self.y - dy,
            self.width + 2 * dx,
            self.height + 2 * dy,
        )
    }

    /// Area of the common part of both rectangles.
    pub fn overlap_area(&self, other: &Rectangle) -> i64 {
        self.intersect(other).area()
    }

    /// Length shared by both rectangles once projected on the Y axis.
    pub fn y_overlap(&self, other: &Rectangle) -> i32 {
        (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0)
    }

    /// Whether the open vertical extents overlap.
    pub fn height_intersect(&self, other: &Rectangle) -> bool {
        self.top() < other.bottom() && other.top() < self.bottom()
    }

    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left(), self.top()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Smallest rectangle enclosing `points`, or `None` for an empty slice.
    pub fn bounding(points: &[Point]) -> Option<Rectangle> {
        let first = points.first()?;
        let (mut x1, mut y1, mut x2, mut y2) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            x1 = x1.min(p.x);
            y1 = y1.min(p.y);
            x2 = x2.max(p.x);
            y2 = y2.max(p.y);
        }
        Some(Rectangle::from_ltrb(x1, y1, x2, y2))
    }
}
