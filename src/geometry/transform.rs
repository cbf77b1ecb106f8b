use super::types::{Point, Rectangle, Size};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

/// Order in which the panels of a page are meant to be read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadingDirection {
    /// Left to right, then down to the next row.
    #[default]
    DownRight,
    /// Right to left, then down to the next row.
    DownLeft,
    /// Top to bottom, then right to the next column.
    RightDown,
    /// Top to bottom, then left to the next column.
    LeftDown,
}

impl ReadingDirection {
    pub const ALL: [ReadingDirection; 4] = [
        ReadingDirection::DownRight,
        ReadingDirection::DownLeft,
        ReadingDirection::RightDown,
        ReadingDirection::LeftDown,
    ];

    /// Matrix mapping page coordinates so the page reads left to right,
    /// top to bottom.
    pub fn matrix(self) -> Matrix3<f64> {
        match self {
            ReadingDirection::DownRight => Matrix3::identity(),
            ReadingDirection::DownLeft => {
                Matrix3::new(-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0)
            }
            ReadingDirection::RightDown => {
                Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
            }
            ReadingDirection::LeftDown => {
                Matrix3::new(0.0, 1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
            }
        }
    }

    fn inverse_matrix(self) -> Matrix3<f64> {
        match self {
            ReadingDirection::LeftDown => {
                Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
            }
            // the other three are involutions
            other => other.matrix(),
        }
    }
}

impl std::str::FromStr for ReadingDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "downright" => Ok(ReadingDirection::DownRight),
            "downleft" => Ok(ReadingDirection::DownLeft),
            "rightdown" => Ok(ReadingDirection::RightDown),
            "leftdown" => Ok(ReadingDirection::LeftDown),
            _ => Err(format!("unknown reading direction '{s}'")),
        }
    }
}

/// Affine map between page space and normalised reading space, together
/// with its inverse. Acts on homogeneous column vectors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReadingTransform {
    matrix: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl Default for ReadingTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<ReadingDirection> for ReadingTransform {
    fn from(direction: ReadingDirection) -> Self {
        Self::for_direction(direction)
    }
}

impl ReadingTransform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
            inverse: Matrix3::identity(),
        }
    }

    pub fn for_direction(direction: ReadingDirection) -> Self {
        Self {
            matrix: direction.matrix(),
            inverse: direction.inverse_matrix(),
        }
    }

    /// Wrap an arbitrary affine matrix; `None` when it is singular.
    ///
    /// Rectangle mapping stays exact only for quarter-turn rotations and axis flips.
    pub fn from_matrix(matrix: Matrix3<f64>) -> Option<Self> {
        let inverse = matrix.try_inverse()?;
        Some(Self { matrix, inverse })
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn inverse(&self) -> ReadingTransform {
        ReadingTransform {
            matrix: self.inverse,
            inverse: self.matrix,
        }
    }

    /// Map a point, rounding to the nearest pixel.
    pub fn transform_point(&self, p: Point) -> Point {
        let v = self.matrix * Vector3::new(p.x as f64, p.y as f64, 1.0);
        Point::new(v[0].round() as i32, v[1].round() as i32)
    }

    pub fn transform_points(&self, pts: &[Point]) -> Vec<Point> {
        pts.iter().map(|&p| self.transform_point(p)).collect()
    }

    /// Map a displacement; translation does not apply.
    pub fn transform_vector(&self, dx: i32, dy: i32) -> (i32, i32) {
        let v = self.matrix * Vector3::new(dx as f64, dy as f64, 0.0);
        (v[0].round() as i32, v[1].round() as i32)
    }

    /// Bounding box of the mapped corners.
    pub fn transform_rect(&self, rect: &Rectangle) -> Rectangle {
        let corners = rect.corners().map(|c| self.transform_point(c));
        let x1 = corners.iter().map(|c| c.x).min().unwrap_or(0);
        let x2 = corners.iter().map(|c| c.x).max().unwrap_or(0);
        let y1 = corners.iter().map(|c| c.y).min().unwrap_or(0);
        let y2 = corners.iter().map(|c| c.y).max().unwrap_or(0);
        Rectangle::from_ltrb(x1, y1, x2, y2)
    }

    /// Map a width/height limit, keeping component magnitudes only.
    pub fn transform_size(&self, size: Size) -> Size {
        let (w, h) = self.transform_vector(size.width, size.height);
        Size::new(w.abs(), h.abs())
    }
}
