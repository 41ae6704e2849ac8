//! Dijkstra's algorithm for a single source/target pair.
//!
//! Binary-heap priority queue over tentative distances. Edge weights are
//! assumed non-negative and not checked; use Bellman-Ford when they are not.

use std::collections::BinaryHeap;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, PathResult};

use super::{trace_path, MinScored};

/// Shortest path from `source` to `target`.
///
/// Stops as soon as `target` is settled. A node's parent is rewritten every
/// time a strictly shorter distance to it is found, so the returned path
/// follows the last improving write.
///
/// Time: O((V + E) log V)
pub fn dijkstra(graph: &Graph, source: u64, target: u64) -> GraphResult<PathResult> {
    let s = graph.require(source, "source")?;
    let t = graph.require(target, "target")?;

    if s == t {
        return Ok(PathResult {
            path: vec![source],
            distance: 0.0,
        });
    }

    let n = graph.node_count();
    let edges = graph.edges();
    let mut distances = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap = BinaryHeap::new();

    distances[s] = 0.0;
    heap.push(MinScored(0.0, s));

    while let Some(MinScored(_, u)) = heap.pop() {
        if settled[u] {
            continue;
        }
        settled[u] = true;
        if u == t {
            break;
        }

        for &pos in graph.outgoing_at(u) {
            let (_, v) = graph.endpoints(pos);
            if settled[v] {
                continue;
            }
            let candidate = distances[u] + edges[pos].weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                parent[v] = Some(u);
                heap.push(MinScored(candidate, v));
            }
        }
    }

    let no_path = || GraphError::NoPathExists {
        source_id: source,
        target_id: target,
    };
    if !settled[t] {
        return Err(no_path());
    }
    let path = trace_path(graph, &parent, s, t).ok_or_else(no_path)?;

    Ok(PathResult {
        path,
        distance: distances[t],
    })
}
