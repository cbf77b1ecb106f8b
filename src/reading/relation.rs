use crate::geometry::{Rectangle, Shape};
use serde::{Deserialize, Serialize};

/// Where a cell sits relative to a reference cell. Variant order is the
/// edge order used by the relation graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellsRelation {
    None,
    BottomOf,
    RightOf,
}

/// Shrink by 10% of each side length on every edge, truncating toward zero.
fn core_box(b: Rectangle) -> Rectangle {
    b.inflate(
        (-(b.width as f64) * 0.1) as i32,
        (-(b.height as f64) * 0.1) as i32,
    )
}

/// Position of `p2` relative to `p1`, in reading space.
///
/// Boxes are first shrunk so thin overlaps between neighbours do not count.
/// `p2` is unrelated when its core lies entirely left of or above `p1`'s.
/// Cores sharing rows make `p2` a right neighbour when its center of gravity
/// is further right; otherwise `p2` is below when its center is lower.
pub fn compare<A: Shape + ?Sized, B: Shape + ?Sized>(p1: &A, p2: &B) -> CellsRelation {
    let (g1, g2) = (p1.center_of_gravity(), p2.center_of_gravity());
    let b1 = core_box(p1.bounding_box());
    let b2 = core_box(p2.bounding_box());

    if b2.right() < b1.left() || b2.bottom() < b1.top() {
        CellsRelation::None
    } else if b1.height_intersect(&b2) {
        if g2.x > g1.x {
            CellsRelation::RightOf
        } else {
            CellsRelation::None
        }
    } else if g2.y > g1.y {
        CellsRelation::BottomOf
    } else {
        CellsRelation::None
    }
}
