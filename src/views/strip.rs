//! Splitting over-wide strips into balanced sub-views.

use crate::geometry::Rectangle;

/// Views whose width imbalance drops below this are left alone.
const BALANCE_TOLERANCE: f64 = 0.2;

/// Horizontal extent of `cells`.
fn span_width(cells: &[Rectangle]) -> i32 {
    let left = cells.iter().map(|c| c.left()).min().unwrap_or(0);
    let right = cells.iter().map(|c| c.right()).max().unwrap_or(0);
    right - left
}

/// `0` for equal widths, approaching `1` as one side dwarfs the other.
fn imbalance(w1: i32, w2: i32) -> f64 {
    let (lo, hi) = (w1.min(w2), w1.max(w2));
    if hi <= 0 {
        return 0.0;
    }
    (1.0 - lo as f64 / hi as f64).abs()
}

/// Greedy left-to-right packing. Returns the exclusive end index of each
/// sub-view; the last entry is `cells.len()`.
pub fn split_greedy(cells: &[Rectangle], max_width: i32) -> Vec<usize> {
    let Some(first) = cells.first() else {
        return Vec::new();
    };
    let mut ends = Vec::new();
    let mut current = *first;
    for (i, cell) in cells.iter().enumerate().skip(1) {
        let grown = current.union(cell);
        if grown.width < max_width {
            current = grown;
        } else {
            ends.push(i);
            current = *cell;
        }
    }
    ends.push(cells.len());
    ends
}

/// Imbalance of views `[first, middle)` and `[middle, last)` if moving the last
/// cell of the first view forward is worthwhile, `None` otherwise.
///
/// The move must leave the first view non-empty, go from the wider to the
/// narrower view, keep the receiving view under `max_width`, and strictly
/// reduce the imbalance.
fn forward_gain(
    cells: &[Rectangle],
    first: usize,
    middle: usize,
    last: usize,
    max_width: i32,
) -> Option<f64> {
    if middle - first <= 1 {
        return None;
    }
    let w1_before = span_width(&cells[first..middle]);
    let w2_before = span_width(&cells[middle..last]);
    if w1_before <= w2_before {
        return None;
    }
    let w2_after = span_width(&cells[middle - 1..last]);
    if w2_after >= max_width {
        return None;
    }
    let w1_after = span_width(&cells[first..middle - 1]);
    let current = imbalance(w1_before, w2_before);
    (imbalance(w1_after, w2_after) < current).then_some(current)
}

/// Boundary to shift next: the pair with the worst improvable imbalance, as
/// long as that imbalance is out of tolerance.
fn next_move(ends: &[usize], cells: &[Rectangle], max_width: i32) -> Option<usize> {
    let mut worst = 0.0;
    let mut index = None;
    for i in 0..ends.len().saturating_sub(1) {
        let first = if i == 0 { 0 } else { ends[i - 1] };
        if let Some(gain) = forward_gain(cells, first, ends[i], ends[i + 1], max_width) {
            if gain > worst {
                worst = gain;
                index = Some(i);
            }
        }
    }
    index.filter(|_| worst >= BALANCE_TOLERANCE)
}

/// Shift boundary cells forward, worst pair first, until every adjacent pair
/// is within tolerance or no move helps.
pub fn balance(mut ends: Vec<usize>, cells: &[Rectangle], max_width: i32) -> Vec<usize> {
    let mut moves = 0;
    while let Some(i) = next_move(&ends, cells, max_width) {
        ends[i] -= 1;
        moves += 1;
    }
    if moves > 0 {
        log::debug!("strip balancing moved {moves} cells across {} views", ends.len());
    }
    ends
}

/// Union of each `[start, end)` group.
pub fn group_unions(cells: &[Rectangle], ends: &[usize]) -> Vec<Rectangle> {
    let mut start = 0;
    let mut out = Vec::with_capacity(ends.len());
    for &end in ends {
        if let Some((head, tail)) = cells[start..end].split_first() {
            out.push(tail.iter().fold(*head, |acc, c| acc.union(c)));
        }
        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(widths: &[i32]) -> Vec<Rectangle> {
        let mut x = 0;
        widths
            .iter()
            .map(|&w| {
                let r = Rectangle::new(x, 0, w, 100);
                x += w + 10;
                r
            })
            .collect()
    }

    #[test]
    fn greedy_split_closes_views_before_they_overflow() {
        let cells = row(&[100, 100, 100, 100]);
        // pairs span 210, triples 320
        assert_eq!(split_greedy(&cells, 300), vec![2, 4]);
        assert_eq!(split_greedy(&cells, 1000), vec![4]);
        assert_eq!(split_greedy(&cells, 50), vec![1, 2, 3, 4]);
        assert!(split_greedy(&[], 100).is_empty());
    }

    #[test]
    fn greedy_three_plus_one_is_rebalanced() {
        let cells = row(&[100, 100, 100, 100]);
        let ends = split_greedy(&cells, 400);
        assert_eq!(ends, vec![3, 4]);
        assert_eq!(balance(ends, &cells, 400), vec![2, 4]);
    }

    #[test]
    fn balanced_views_are_left_alone() {
        let cells = row(&[100, 100, 100, 100]);
        assert_eq!(balance(vec![2, 4], &cells, 400), vec![2, 4]);
    }

    #[test]
    fn small_imbalance_is_tolerated() {
        // first view spans 100, second 85: moving the middle cell would bring
        // them to 100 and 95, but 0.15 is already within tolerance
        let cells = vec![
            Rectangle::new(0, 0, 100, 10),
            Rectangle::new(5, 20, 90, 10),
            Rectangle::new(15, 40, 85, 10),
        ];
        assert!(forward_gain(&cells, 0, 2, 3, 400).is_some());
        assert_eq!(next_move(&[2, 3], &cells, 400), None);
        assert_eq!(balance(vec![2, 3], &cells, 400), vec![2, 3]);
    }

    #[test]
    fn worst_pair_moves_first() {
        let cells = row(&[100, 100, 100, 40, 40, 20]);
        // views span 320 | 90 | 20; the second pair is the more lopsided
        assert_eq!(next_move(&[3, 5, 6], &cells, 1000), Some(1));
        assert_eq!(next_move(&[3, 4, 6], &cells, 1000), Some(0));
        assert_eq!(balance(vec![3, 5, 6], &cells, 1000), vec![2, 3, 6]);
    }

    #[test]
    fn moves_that_overflow_the_receiver_are_refused() {
        let cells = row(&[100, 100, 100, 100]);
        // receiving view would span 210, not under 200
        assert_eq!(balance(vec![3, 4], &cells, 200), vec![3, 4]);
    }

    #[test]
    fn unions_cover_each_group() {
        let cells = row(&[100, 50, 80]);
        assert_eq!(
            group_unions(&cells, &[2, 3]),
            vec![Rectangle::new(0, 0, 160, 100), cells[2]]
        );
    }
}
