//! Reading order of page cells.
//!
//! Cells are compared pairwise in reading space (left to right, top to
//! bottom) to build a directed graph of `RightOf`/`BottomOf` relations. Two
//! shortcut patterns are pruned, and the remaining graph is walked
//! topologically, preferring to finish a row before moving down.

mod graph;
mod order;
mod relation;

pub use graph::RelationGraph;
pub use order::ReadingOrder;
pub use relation::{compare, CellsRelation};

use crate::geometry::Shape;

/// Cells in reading order, yielded lazily.
pub fn get_reading_order<S: Shape>(cells: &[S]) -> ReadingOrder<'_, S> {
    let mut graph = RelationGraph::build(cells);
    graph.simplify();
    log::debug!(
        "reading graph: {} cells, {} edges after simplification",
        graph.len(),
        graph.edge_count()
    );
    ReadingOrder::new(cells, graph)
}

/// Reading-order permutation of `cells` as indices.
pub fn reading_order_indices<S: Shape>(cells: &[S]) -> Vec<usize> {
    let mut order = get_reading_order(cells);
    std::iter::from_fn(|| order.next_index()).collect()
}
