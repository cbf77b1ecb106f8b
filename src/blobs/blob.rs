use super::segment::Segment;
use crate::error::{PanelError, Result};
use crate::geometry::{Point, Rectangle};
use std::cell::OnceCell;
use std::collections::HashSet;

/// Connected foreground region stored as the scanline runs it owns.
///
/// Derived geometry is memoised and dropped on every mutation.
#[derive(Clone, Debug, Default)]
pub struct Blob {
    regions: Vec<(i32, Segment)>,
    owned: HashSet<(i32, Segment)>,
    sorted: bool,
    bounding_box: OnceCell<Rectangle>,
    hull: OnceCell<Vec<Point>>,
}

impl Blob {
    pub fn new(row: i32, segment: Segment) -> Self {
        let mut blob = Blob {
            sorted: true,
            ..Default::default()
        };
        blob.add_region(row, segment);
        blob
    }

    pub fn regions(&self) -> &[(i32, Segment)] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn invalidate(&mut self) {
        self.bounding_box.take();
        self.hull.take();
    }

    pub fn add_region(&mut self, row: i32, segment: Segment) {
        self.sorted = match self.regions.last() {
            None => true,
            Some(&(last_row, last)) => {
                self.sorted && (last_row < row || (last_row == row && last.to <= segment.from))
            }
        };
        self.regions.push((row, segment));
        self.owned.insert((row, segment));
        self.invalidate();
    }

    /// Take over every region of `other`.
    ///
    /// Fails with [`PanelError::Consistency`] if a region is already owned here.
    pub fn merge_with(&mut self, other: Blob) -> Result<()> {
        if let Some(&(row, seg)) = other.regions.iter().find(|&r| self.owned.contains(r)) {
            return Err(PanelError::Consistency(format!(
                "run [{}, {}) on row {row} is owned by two live blobs",
                seg.from, seg.to
            )));
        }
        self.owned.extend(other.regions.iter().copied());
        self.regions.extend(other.regions);
        self.sorted = false;
        self.invalidate();
        Ok(())
    }

    /// Bounding box over all runs; empty for an empty blob.
    pub fn bounding_box(&self) -> Rectangle {
        *self.bounding_box.get_or_init(|| {
            let Some(&(row0, seg0)) = self.regions.first() else {
                return Rectangle::default();
            };
            let (mut min_x, mut max_x, mut min_y, mut max_y) = (seg0.from, seg0.to, row0, row0 + 1);
            for &(row, seg) in &self.regions[1..] {
                min_x = min_x.min(seg.from);
                max_x = max_x.max(seg.to);
                min_y = min_y.min(row);
                max_y = max_y.max(row + 1);
            }
            Rectangle::from_ltrb(min_x, min_y, max_x, max_y)
        })
    }

    /// Number of foreground pixels.
    pub fn pixel_area(&self) -> i64 {
        self.regions.iter().map(|(_, s)| s.width() as i64).sum()
    }

    /// Mean pixel position, truncated to whole pixels.
    pub fn center_of_gravity(&self) -> Point {
        let area = self.pixel_area();
        if area == 0 {
            return Point::default();
        }
        let (mut sx, mut sy) = (0i64, 0i64);
        for &(row, seg) in &self.regions {
            let w = seg.width() as i64;
            sx += (seg.from as i64 + seg.to as i64 - 1) * w / 2;
            sy += row as i64 * w;
        }
        Point::new((sx / area) as i32, (sy / area) as i32)
    }

    fn sorted_regions(&self) -> std::borrow::Cow<'_, [(i32, Segment)]> {
        if self.sorted {
            std::borrow::Cow::Borrowed(&self.regions)
        } else {
            let mut v = self.regions.clone();
            v.sort_unstable_by_key(|&(row, seg)| (row, seg.from));
            std::borrow::Cow::Owned(v)
        }
    }

    /// Leftmost start and rightmost end of every row, top to bottom.
    pub fn scan_extremities(&self) -> Vec<Point> {
        let regions = self.sorted_regions();
        let mut out = Vec::new();
        let mut i = 0;
        while i < regions.len() {
            let row = regions[i].0;
            let first = regions[i].1;
            let mut last = first;
            while i < regions.len() && regions[i].0 == row {
                last = regions[i].1;
                i += 1;
            }
            out.push(Point::new(first.from, row));
            out.push(Point::new(last.to, row));
        }
        out
    }

    /// Convex hull of the row extremities (monotone chain).
    ///
    /// A single-row blob yields its two run ends; an empty blob yields nothing.
    pub fn convex_hull(&self) -> &[Point] {
        self.hull
            .get_or_init(|| monotone_chain(&self.scan_extremities()))
    }
}

fn cross(o: Point, a: Point, b: Point) -> i64 {
    (a.x as i64 - o.x as i64) * (b.y as i64 - o.y as i64)
        - (a.y as i64 - o.y as i64) * (b.x as i64 - o.x as i64)
}

/// `points` must already be ordered by (y, x).
fn monotone_chain(points: &[Point]) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let push = |chain: &mut Vec<Point>, p: Point| {
        while chain.len() >= 2 && cross(chain[chain.len() - 2], chain[chain.len() - 1], p) <= 0 {
            chain.pop();
        }
        chain.push(p);
    };
    let mut lower = Vec::with_capacity(points.len());
    for &p in points {
        push(&mut lower, p);
    }
    let mut upper = Vec::with_capacity(points.len());
    for &p in points.iter().rev() {
        push(&mut upper, p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
