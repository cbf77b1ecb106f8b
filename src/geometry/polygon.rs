use super::types::{Point, Rectangle};
use serde::Serialize;
use std::sync::OnceLock;

/// Read-only view shared by page cells and their reading-space images.
pub trait Shape {
    /// Enclosed area, always non-negative.
    fn area(&self) -> i64;
    fn bounding_box(&self) -> Rectangle;
    /// Density-weighted anchor supplied by the producer (pixel centroid for
    /// extracted cells), not the geometric centroid of the outline.
    fn center_of_gravity(&self) -> Point;
    /// Ordered outline.
    fn points(&self) -> &[Point];
    fn contains_point(&self, point: Point) -> bool;

    /// Whether every outline point of `other` lies inside this shape.
    ///
    /// Disjoint bounding boxes reject early. The test is exact for convex
    /// outlines only.
    fn contains<S: Shape + ?Sized>(&self, other: &S) -> bool
    where
        Self: Sized,
    {
        if !other.bounding_box().intersects_with(&self.bounding_box()) {
            return false;
        }
        other.points().iter().all(|&p| self.contains_point(p))
    }
}

/// Cell outline: a boundary point sequence with its bounding box and center
/// of gravity. Immutable once built.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    bounding_box: Rectangle,
    points: Vec<Point>,
    center_of_gravity: Point,
    #[serde(skip)]
    area: OnceLock<i64>,
}

impl Polygon {
    pub fn new(bounding_box: Rectangle, points: Vec<Point>, center_of_gravity: Point) -> Self {
        Self {
            bounding_box,
            points,
            center_of_gravity,
            area: OnceLock::new(),
        }
    }

    /// Four-corner outline of an axis-aligned rectangle, clockwise in image
    /// coordinates, anchored at its middle.
    pub fn rectangle(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(
            Rectangle::new(x, y, width, height),
            vec![
                Point::new(x, y),
                Point::new(x + width, y),
                Point::new(x + width, y + height),
                Point::new(x, y + height),
            ],
            Point::new(x + width / 2, y + height / 2),
        )
    }

    fn compute_area(&self) -> i64 {
        let n = self.points.len();
        if n < 3 {
            return 0;
        }
        let mut twice = 0i64;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (self.points[j], self.points[i]);
            twice += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
            j = i;
        }
        (twice / 2).abs()
    }
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.bounding_box == other.bounding_box
            && self.points == other.points
            && self.center_of_gravity == other.center_of_gravity
    }
}

impl Eq for Polygon {}

impl Shape for Polygon {
    fn area(&self) -> i64 {
        *self.area.get_or_init(|| self.compute_area())
    }

    fn bounding_box(&self) -> Rectangle {
        self.bounding_box
    }

    fn center_of_gravity(&self) -> Point {
        self.center_of_gravity
    }

    fn points(&self) -> &[Point] {
        &self.points
    }

    /// Even-odd ray cast towards +x. An edge counts when exactly one of its
    /// endpoints lies strictly below the point's row, so shared vertices are
    /// seen once.
    fn contains_point(&self, point: Point) -> bool {
        let pts = &self.points;
        let n = pts.len();
        if n == 0 {
            return false;
        }
        let (px, py) = (point.x as i64, point.y as i64);
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (pts[i].x as i64, pts[i].y as i64);
            let (xj, yj) = (pts[j].x as i64, pts[j].y as i64);
            if (yi > py) != (yj > py) && (px - xi) < (xj - xi) * (py - yi) / (yj - yi) {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_points(points: &[(i32, i32)]) -> Polygon {
        let pts: Vec<Point> = points.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let bbox = Rectangle::bounding(&pts).unwrap_or_default();
        Polygon::new(bbox, pts, Point::new(bbox.x, bbox.y))
    }

    #[test]
    fn rectangle_area_is_width_times_height() {
        assert_eq!(Polygon::rectangle(0, 0, 10, 20).area(), 200);
        assert_eq!(Polygon::rectangle(-5, 7, 13, 3).area(), 39);
    }

    #[test]
    fn area_ignores_winding() {
        let ccw = from_points(&[(10, 0), (10, 20), (0, 20)]);
        let cw = from_points(&[(0, 20), (10, 20), (10, 0)]);
        assert_eq!(ccw.area(), 100);
        assert_eq!(cw.area(), 100);
    }

    #[test]
    fn degenerate_outlines_have_no_area() {
        assert_eq!(from_points(&[(3, 4), (9, 4)]).area(), 0);
        assert_eq!(from_points(&[]).area(), 0);
    }

    #[test]
    fn point_containment_in_rectangle() {
        let rect = Polygon::rectangle(0, 0, 10, 20);
        for p in [(0, 0), (3, 2), (5, 5), (9, 5), (9, 19)] {
            assert!(rect.contains_point(Point::new(p.0, p.1)), "{p:?} inside");
        }
        for p in [(-10, 20), (10, 5), (121, 43)] {
            assert!(!rect.contains_point(Point::new(p.0, p.1)), "{p:?} outside");
        }
    }

    #[test]
    fn point_containment_in_triangle() {
        let tri = from_points(&[(0, 0), (10, 0), (0, 20)]);
        for p in [(0, 0), (2, 1), (5, 5), (1, 15)] {
            assert!(tri.contains_point(Point::new(p.0, p.1)), "{p:?} inside");
        }
        for p in [(5, 16), (-10, 20), (10, 5), (121, 43)] {
            assert!(!tri.contains_point(Point::new(p.0, p.1)), "{p:?} outside");
        }
    }

    #[test]
    fn nested_rectangles() {
        let outer = Polygon::rectangle(0, 0, 10, 20);
        let inner = Polygon::rectangle(2, 2, 6, 16);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }

    #[test]
    fn crossing_and_disjoint_rectangles_do_not_contain_each_other() {
        let wide = Polygon::rectangle(0, 5, 30, 10);
        let tall = Polygon::rectangle(10, 0, 10, 30);
        assert!(!wide.contains(&tall));
        assert!(!tall.contains(&wide));

        let far = Polygon::rectangle(100, 100, 5, 5);
        assert!(!wide.contains(&far));
        assert!(!far.contains(&wide));
    }

    #[test]
    fn empty_outline_contains_nothing() {
        let empty = Polygon::new(Rectangle::default(), Vec::new(), Point::default());
        assert!(!empty.contains_point(Point::new(0, 0)));
    }

    #[test]
    fn cached_area_is_shared_across_threads() {
        let cells: Vec<Polygon> = (0..4)
            .map(|i| Polygon::rectangle(i * 20, 0, 10, 10 + i))
            .collect();
        let areas: Vec<i64> = std::thread::scope(|s| {
            let handles: Vec<_> = cells.iter().map(|c| s.spawn(move || c.area())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(areas, vec![100, 110, 120, 130]);
        assert_eq!(cells[3].area(), 130);
    }
}
