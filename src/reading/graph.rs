use super::relation::{compare, CellsRelation};
use crate::geometry::Shape;
use std::collections::HashSet;

/// Directed edges between cells, addressed by index into the cell slice.
///
/// Each adjacency list is sorted by relation (`BottomOf` before `RightOf`);
/// ties keep index order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelationGraph {
    edges: Vec<Vec<(CellsRelation, usize)>>,
}

impl RelationGraph {
    /// Compare every ordered pair of distinct cells.
    pub fn build<S: Shape>(cells: &[S]) -> Self {
        let edges = cells
            .iter()
            .enumerate()
            .map(|(i, p1)| {
                let mut out: Vec<(CellsRelation, usize)> = cells
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .map(|(j, p2)| (compare(p1, p2), j))
                    .filter(|&(rel, _)| rel != CellsRelation::None)
                    .collect();
                out.sort_by_key(|&(rel, _)| rel);
                out
            })
            .collect();
        Self { edges }
    }

    #[cfg(test)]
    pub(crate) fn from_edges(edges: Vec<Vec<(CellsRelation, usize)>>) -> Self {
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn successors(&self, node: usize) -> &[(CellsRelation, usize)] {
        &self.edges[node]
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.edges[from].iter().any(|&(_, j)| j == to)
    }

    /// Prune shortcut edges implied by two local patterns.
    ///
    /// - `p1 -BottomOf-> p2 -any-> p3` drops `p1 -> p3`.
    /// - `p1 -RightOf-> p2 -RightOf-> p3` drops `p1 -> p3`.
    ///
    /// Removals are collected on the unmodified graph, then applied.
    pub fn simplify(&mut self) {
        let mut removes: HashSet<(usize, usize)> = HashSet::new();
        for (p1, out) in self.edges.iter().enumerate() {
            for &(rel, p2) in out {
                for &(rel2, p3) in &self.edges[p2] {
                    let implied = rel == CellsRelation::BottomOf
                        || (rel == CellsRelation::RightOf && rel2 == CellsRelation::RightOf);
                    if implied {
                        removes.insert((p1, p3));
                    }
                }
            }
        }
        if removes.is_empty() {
            return;
        }
        let before = self.edge_count();
        for (p1, out) in self.edges.iter_mut().enumerate() {
            out.retain(|&(_, p3)| !removes.contains(&(p1, p3)));
        }
        log::debug!(
            "relation graph simplified from {} to {} edges",
            before,
            self.edge_count()
        );
    }

    /// Predecessor lists, sorted by relation like the forward lists.
    pub fn inverted(&self) -> RelationGraph {
        let mut edges = vec![Vec::new(); self.edges.len()];
        for (from, out) in self.edges.iter().enumerate() {
            for &(rel, to) in out {
                edges[to].push((rel, from));
            }
        }
        for preds in &mut edges {
            preds.sort_by_key(|&(rel, _)| rel);
        }
        RelationGraph { edges }
    }
}
