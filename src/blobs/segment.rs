use serde::{Deserialize, Serialize};

/// Half-open run `[from, to)` of foreground pixels on one scanline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Segment {
    pub from: i32,
    pub to: i32,
}

impl Segment {
    #[inline]
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    #[inline]
    pub const fn width(&self) -> i32 {
        self.to - self.from
    }

    /// 4-connectivity between runs on consecutive rows.
    #[inline]
    pub const fn overlaps(&self, other: &Segment) -> bool {
        self.from < other.to && other.from < self.to
    }
}

/// Pack the `true` pixels of a row into maximal runs, left to right.
pub fn pack_row(row: &[bool]) -> Vec<Segment> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (x, &on) in row.iter().enumerate() {
        match (on, start) {
            (true, None) => start = Some(x),
            (false, Some(s)) => {
                runs.push(Segment::new(s as i32, x as i32));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        runs.push(Segment::new(s as i32, row.len() as i32));
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_runs_including_trailing_one() {
        let row = [false, true, true, false, true, false, false, true];
        assert_eq!(
            pack_row(&row),
            vec![Segment::new(1, 3), Segment::new(4, 5), Segment::new(7, 8)]
        );
        assert!(pack_row(&[false; 4]).is_empty());
        assert_eq!(pack_row(&[true; 3]), vec![Segment::new(0, 3)]);
    }

    #[test]
    fn diagonal_neighbours_do_not_overlap() {
        let a = Segment::new(0, 3);
        assert!(a.overlaps(&Segment::new(2, 5)));
        assert!(!a.overlaps(&Segment::new(3, 5)));
        assert_eq!(a.width(), 3);
    }
}
