//! Bounded excerpts of computed results and graphs, for display.
//!
//! Everything here reads finished results; nothing is recomputed or altered.

use serde::Serialize;

use crate::algorithms::DistanceMatrix;
use crate::graph::Graph;
use crate::types::{Edge, Node, SingleSourceResult};

/// One cell of a distance-matrix excerpt. `None` when unreachable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixCell {
    pub target: u64,
    pub distance: Option<f64>,
}

/// One source row of a distance-matrix excerpt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub source: u64,
    pub cells: Vec<MatrixCell>,
}

/// A reachable node and its distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachedSample {
    pub node: u64,
    pub distance: f64,
}

/// A display-sized slice of a graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSample {
    pub nodes: Vec<Node>,
    /// Only edges with both endpoints among `nodes`.
    pub edges: Vec<Edge>,
    pub total_nodes: usize,
    pub total_edges: usize,
    pub truncated: bool,
}

/// The first `rows` sources by the first `cols` targets, in graph node order.
pub fn window_matrix(matrix: &DistanceMatrix, rows: usize, cols: usize) -> Vec<MatrixRow> {
    let ids = matrix.ids();
    ids.iter()
        .take(rows)
        .map(|&source| MatrixRow {
            source,
            cells: ids
                .iter()
                .take(cols)
                .map(|&target| MatrixCell {
                    target,
                    distance: matrix.distance(source, target),
                })
                .collect(),
        })
        .collect()
}

/// The first `n` reached nodes in ascending ID order.
pub fn sample_reachable(result: &SingleSourceResult, n: usize) -> Vec<ReachedSample> {
    result
        .reached
        .iter()
        .take(n)
        .map(|(&node, reached)| ReachedSample {
            node,
            distance: reached.distance,
        })
        .collect()
}

/// Keep at most `max_nodes` nodes (lowest IDs first) and the edges among them.
pub fn sample_graph(graph: &Graph, max_nodes: usize) -> GraphSample {
    let truncated = graph.node_count() > max_nodes;
    let mut nodes: Vec<Node> = graph.nodes().to_vec();
    let edges = if truncated {
        nodes.sort_by_key(|n| n.id);
        nodes.truncate(max_nodes);
        let kept: std::collections::HashSet<u64> = nodes.iter().map(|n| n.id).collect();
        graph
            .edges()
            .iter()
            .filter(|e| kept.contains(&e.from) && kept.contains(&e.to))
            .copied()
            .collect()
    } else {
        graph.edges().to_vec()
    };

    GraphSample {
        nodes,
        edges,
        total_nodes: graph.node_count(),
        total_edges: graph.edge_count(),
        truncated,
    }
}
