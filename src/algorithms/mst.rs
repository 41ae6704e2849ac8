//! Minimum spanning trees over the undirected projection (Prim, Kruskal).
//!
//! Both algorithms return a spanning forest when the projection is
//! disconnected: one tree per component, totals summed across components.
//! On weight ties they may pick different edges, but their totals agree.

use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::types::{TreeEdge, TreeResult, UndirectedEdge};

use super::{MinScored, UnionFind};

/// Prim's algorithm with a lazy binary heap.
///
/// Grows a tree from the first node (in graph order) not yet spanned, always
/// taking the lightest edge that leaves the tree, and restarts for every
/// remaining component. Equal weights resolve to the earlier edge.
///
/// Time: O(E log E)
pub fn prim(graph: &Graph) -> TreeResult {
    let n = graph.node_count();
    let candidates = graph.undirected_edges();

    let mut incident: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (ci, c) in candidates.iter().enumerate() {
        if c.a != c.b {
            incident[c.a].push(ci);
            incident[c.b].push(ci);
        }
    }

    let mut in_tree = vec![false; n];
    let mut heap: BinaryHeap<MinScored<usize>> = BinaryHeap::new();
    let mut selected = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;
    let mut components = 0;

    for root in 0..n {
        if in_tree[root] {
            continue;
        }
        components += 1;
        in_tree[root] = true;
        push_frontier(&mut heap, &candidates, &incident[root], &in_tree);

        while let Some(MinScored(weight, ci)) = heap.pop() {
            let c = &candidates[ci];
            let next = match (in_tree[c.a], in_tree[c.b]) {
                (true, false) => c.b,
                (false, true) => c.a,
                _ => continue,
            };
            in_tree[next] = true;
            selected.push(tree_edge(graph, c));
            total_weight += weight;
            push_frontier(&mut heap, &candidates, &incident[next], &in_tree);
        }
    }

    log::debug!(
        "Prim selected {} edges across {} components",
        selected.len(),
        components
    );

    TreeResult {
        edges: selected,
        total_weight,
        components,
    }
}

/// Kruskal's algorithm.
///
/// Sorts candidates by weight (stable, so ties keep edge order) and accepts
/// every edge that joins two different union-find sets.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal(graph: &Graph) -> TreeResult {
    let n = graph.node_count();
    let mut candidates: Vec<UndirectedEdge> = graph
        .undirected_edges()
        .into_iter()
        .filter(|c| c.a != c.b)
        .collect();
    candidates.sort_by(|x, y| x.weight.total_cmp(&y.weight));

    let mut uf = UnionFind::new(n);
    let mut selected = Vec::with_capacity(n.saturating_sub(1));
    let mut total_weight = 0.0;

    for c in &candidates {
        if selected.len() + 1 >= n {
            break;
        }
        if uf.union(c.a, c.b) {
            selected.push(tree_edge(graph, c));
            total_weight += c.weight;
        }
    }

    log::debug!(
        "Kruskal selected {} edges across {} components",
        selected.len(),
        uf.components()
    );

    TreeResult {
        edges: selected,
        total_weight,
        components: uf.components(),
    }
}

fn push_frontier(
    heap: &mut BinaryHeap<MinScored<usize>>,
    candidates: &[UndirectedEdge],
    incident: &[usize],
    in_tree: &[bool],
) {
    for &ci in incident {
        let c = &candidates[ci];
        if !(in_tree[c.a] && in_tree[c.b]) {
            heap.push(MinScored(c.weight, ci));
        }
    }
}

fn tree_edge(graph: &Graph, c: &UndirectedEdge) -> TreeEdge {
    let edge = &graph.edges()[c.index];
    TreeEdge {
        from: edge.from,
        to: edge.to,
        weight: edge.weight,
    }
}
