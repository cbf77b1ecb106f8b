use crate::geometry::{ReadingTransform, Rectangle, Size};

/// A merged viewport and the cell boxes it was built from, in input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Merges {
    pub rect: Rectangle,
    pub contributors: Vec<Rectangle>,
}

impl Merges {
    pub fn single(rect: Rectangle) -> Self {
        Self {
            rect,
            contributors: vec![rect],
        }
    }
}

/// Symmetric test deciding whether two boxes belong in the same view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlapRule {
    /// Intersection covers at least half of either box.
    Cells,
    /// Vertical overlap exceeds half the height of either box.
    Strip,
}

impl OverlapRule {
    pub fn overlaps(self, r1: &Rectangle, r2: &Rectangle) -> bool {
        match self {
            OverlapRule::Cells => {
                let common = r1.overlap_area(r2) as f64;
                let covers = |r: &Rectangle| r.area() > 0 && common / r.area() as f64 >= 0.5;
                covers(r1) || covers(r2)
            }
            OverlapRule::Strip => {
                let common = r1.y_overlap(r2) as f64;
                let covers = |r: &Rectangle| r.height > 0 && common / r.height as f64 > 0.5;
                covers(r1) || covers(r2)
            }
        }
    }
}

/// Upper bound on merged view size; an axis given as a negative limit is
/// unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeCap {
    max_width: i32,
    max_height: i32,
}

impl SizeCap {
    pub const UNBOUNDED: SizeCap = SizeCap {
        max_width: i32::MAX,
        max_height: i32::MAX,
    };

    pub fn from_limits(max_width: i32, max_height: i32) -> Self {
        let open = |v: i32| if v < 0 { i32::MAX } else { v };
        Self {
            max_width: open(max_width),
            max_height: open(max_height),
        }
    }

    /// Carry the cap through `transform`; quarter turns swap the axes.
    pub fn transformed(self, transform: &ReadingTransform) -> Self {
        let size = transform.transform_size(Size::new(self.max_width, self.max_height));
        Self {
            max_width: size.width,
            max_height: size.height,
        }
    }

    pub fn max_width(&self) -> Option<i32> {
        (self.max_width != i32::MAX).then_some(self.max_width)
    }

    pub fn max_height(&self) -> Option<i32> {
        (self.max_height != i32::MAX).then_some(self.max_height)
    }

    pub fn fits(&self, r: &Rectangle) -> bool {
        r.width <= self.max_width && r.height <= self.max_height
    }
}

/// One sweep: every unmerged box absorbs the later unmerged boxes that
/// overlap it, as long as the growing union stays within `cap`.
fn merge_single_pass(cells: Vec<Merges>, rule: OverlapRule, cap: &SizeCap) -> Vec<Merges> {
    let mut merged = vec![false; cells.len()];
    let mut out = Vec::with_capacity(cells.len());
    for i in 0..cells.len() {
        if merged[i] {
            continue;
        }
        let reference = cells[i].rect;
        let mut result = cells[i].clone();
        for j in i + 1..cells.len() {
            if merged[j] || !rule.overlaps(&reference, &cells[j].rect) {
                continue;
            }
            let union = result.rect.union(&cells[j].rect);
            if cap.fits(&union) {
                result.rect = union;
                result.contributors.extend_from_slice(&cells[j].contributors);
                merged[j] = true;
            }
        }
        out.push(result);
    }
    out
}

/// Repeat merge sweeps until the number of views stops shrinking.
///
/// Each output keeps the position of its earliest contributor.
pub fn merge_cells_iterative(cells: &[Rectangle], rule: OverlapRule, cap: &SizeCap) -> Vec<Merges> {
    let mut current: Vec<Merges> = cells.iter().copied().map(Merges::single).collect();
    let mut passes = 0;
    loop {
        let before = current.len();
        current = merge_single_pass(current, rule, cap);
        passes += 1;
        if current.len() == before {
            break;
        }
    }
    log::debug!(
        "{:?} merge: {} boxes -> {} views in {} passes",
        rule,
        cells.len(),
        current.len(),
        passes
    );
    current
}
