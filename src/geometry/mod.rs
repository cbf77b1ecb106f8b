//! Integer page geometry: rectangles, convex cell outlines and the
//! reading-direction transforms that normalise a page to left-to-right,
//! top-to-bottom order.

pub mod polygon;
pub mod transform;
pub mod transformed;
pub mod types;

pub use self::polygon::{Polygon, Shape};
pub use self::transform::{ReadingDirection, ReadingTransform};
pub use self::transformed::TransformedPolygon;
pub use self::types::{Point, Rectangle, Size};
