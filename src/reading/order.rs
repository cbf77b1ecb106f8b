use super::graph::RelationGraph;
use super::relation::CellsRelation;
use crate::geometry::Shape;

/// Bound on the row-rewind walk used to break cycles.
const MAX_REWIND_HOPS: usize = 10;

/// Pull-based topological walk over a simplified relation graph.
///
/// A cell becomes ready once all its predecessors are read. Ready cells sit on
/// a stack, so right neighbours (pushed last) are read before the row below.
/// When nothing is ready but cells remain, the graph has a cycle: the walk
/// logs a warning, picks the topmost unread cell and rewinds along unread
/// `RightOf` predecessors to the start of its row.
///
/// Single pass; every cell is produced exactly once.
pub struct ReadingOrder<'a, S: Shape> {
    cells: &'a [S],
    graph: RelationGraph,
    inverse: RelationGraph,
    stack: Vec<usize>,
    processed: Vec<bool>,
    remaining: usize,
}

impl<'a, S: Shape> ReadingOrder<'a, S> {
    pub fn new(cells: &'a [S], graph: RelationGraph) -> Self {
        let inverse = graph.inverted();
        let mut seeds: Vec<usize> = (0..cells.len())
            .filter(|&i| inverse.successors(i).is_empty())
            .collect();
        seeds.sort_by_key(|&i| cells[i].bounding_box().y);
        seeds.reverse();
        Self {
            cells,
            graph,
            inverse,
            stack: seeds,
            processed: vec![false; cells.len()],
            remaining: cells.len(),
        }
    }

    fn ready(&self, node: usize) -> bool {
        self.inverse
            .successors(node)
            .iter()
            .all(|&(_, p)| self.processed[p])
    }

    fn top(&self, node: usize) -> i32 {
        self.cells[node].bounding_box().top()
    }

    /// Topmost unread cell, then up to [`MAX_REWIND_HOPS`] steps back along its
    /// highest unread left neighbour.
    fn recover(&self) -> Option<usize> {
        let mut node: Option<usize> = None;
        for i in (0..self.cells.len()).filter(|&i| !self.processed[i]) {
            if node.map_or(true, |n| self.top(i) < self.top(n)) {
                node = Some(i);
            }
        }
        let mut node = node?;
        for _ in 0..MAX_REWIND_HOPS {
            let left = self
                .inverse
                .successors(node)
                .iter()
                .filter(|&&(rel, p)| rel == CellsRelation::RightOf && !self.processed[p])
                .map(|&(_, p)| p)
                .min_by_key(|&p| self.top(p));
            match left {
                Some(p) => node = p,
                None => break,
            }
        }
        log::warn!(
            "cyclic reading graph, resuming at cell {} ({} cells unread)",
            node,
            self.remaining
        );
        Some(node)
    }

    /// Index of the next cell to read.
    pub fn next_index(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let node = loop {
            match self.stack.pop() {
                Some(i) if self.processed[i] => continue,
                Some(i) => break i,
                None => break self.recover()?,
            }
        };
        self.processed[node] = true;
        self.remaining -= 1;

        let enabled: Vec<usize> = self
            .graph
            .successors(node)
            .iter()
            .map(|&(_, s)| s)
            .filter(|&s| !self.processed[s] && self.ready(s))
            .collect();
        self.stack.extend(enabled);
        Some(node)
    }
}

impl<'a, S: Shape> Iterator for ReadingOrder<'a, S> {
    type Item = &'a S;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.next_index()?;
        Some(&self.cells[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Shape> ExactSizeIterator for ReadingOrder<'_, S> {}
