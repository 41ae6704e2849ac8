//! The graph algorithms. Every entry point is a pure function of a borrowed
//! [`Graph`](crate::graph::Graph) and its parameters; all working state is
//! local to the call.

pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod max_flow;
pub mod mst;
pub mod union_find;

pub use bellman_ford::bellman_ford;
pub use dijkstra::dijkstra;
pub use floyd_warshall::{floyd_warshall, DistanceMatrix};
pub use max_flow::{max_flow, max_flow_with_epsilon};
pub use mst::{kruskal, prim};
pub use union_find::UnionFind;

use std::cmp::Ordering;

use crate::graph::Graph;

/// Heap entry ordered so that `BinaryHeap` pops the smallest score first.
///
/// Ties are broken by the payload, smallest first, which keeps heap order
/// deterministic for equal scores.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MinScored<T>(pub f64, pub T);

impl<T: Ord> PartialEq for MinScored<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for MinScored<T> {}

impl<T: Ord> PartialOrd for MinScored<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for MinScored<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .total_cmp(&self.0)
            .then_with(|| other.1.cmp(&self.1))
    }
}

/// Walk predecessor pointers back from `target` and return node IDs source-first.
///
/// Returns `None` if the chain does not lead back to `source` within
/// `node_count` steps.
pub(crate) fn trace_path(
    graph: &Graph,
    parent: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<u64>> {
    let mut path = vec![graph.id_at(target)];
    let mut current = target;
    while current != source {
        if path.len() > graph.node_count() {
            return None;
        }
        current = parent[current]?;
        path.push(graph.id_at(current));
    }
    path.reverse();
    Some(path)
}
