use super::polygon::Shape;
use super::transform::ReadingTransform;
use super::types::{Point, Rectangle};
use std::cell::OnceCell;

/// A shape seen through a reading transform. The base is borrowed, never
/// copied; derived geometry is computed on first use and cached.
#[derive(Clone, Debug)]
pub struct TransformedPolygon<'a, S: Shape = super::Polygon> {
    base: &'a S,
    transform: ReadingTransform,
    bounds: OnceCell<Rectangle>,
    center_of_gravity: OnceCell<Point>,
    points: OnceCell<Vec<Point>>,
}

impl<'a, S: Shape> TransformedPolygon<'a, S> {
    pub fn new(base: &'a S, transform: ReadingTransform) -> Self {
        Self {
            base,
            transform,
            bounds: OnceCell::new(),
            center_of_gravity: OnceCell::new(),
            points: OnceCell::new(),
        }
    }

    pub fn base(&self) -> &'a S {
        self.base
    }

    pub fn transform(&self) -> &ReadingTransform {
        &self.transform
    }
}

impl<S: Shape> Shape for TransformedPolygon<'_, S> {
    fn area(&self) -> i64 {
        self.base.area()
    }

    /// Valid for quarter-turn rotations and flips; other transforms would need
    /// every outline point mapped.
    fn bounding_box(&self) -> Rectangle {
        *self
            .bounds
            .get_or_init(|| self.transform.transform_rect(&self.base.bounding_box()))
    }

    fn center_of_gravity(&self) -> Point {
        *self
            .center_of_gravity
            .get_or_init(|| self.transform.transform_point(self.base.center_of_gravity()))
    }

    fn points(&self) -> &[Point] {
        self.points
            .get_or_init(|| self.transform.transform_points(self.base.points()))
    }

    /// `point` is in reading space; it is mapped back before asking the base.
    fn contains_point(&self, point: Point) -> bool {
        self.base
            .contains_point(self.transform.inverse().transform_point(point))
    }
}
