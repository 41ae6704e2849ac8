//! Bellman-Ford algorithm for single-source shortest paths.
//!
//! Handles negative edge weights and detects negative cycles reachable from
//! the source.

use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::types::{GraphResult, Reached, SingleSourceResult};

use super::trace_path;

/// Bellman-Ford single-source shortest paths.
///
/// Relaxes every edge up to V - 1 times, stopping early once a pass changes
/// nothing. A further pass that still finds an improvable edge means a
/// negative cycle is reachable; the result then carries that cycle and no
/// distances. Unreachable nodes are simply absent from `reached`.
///
/// Time: O(V * E)
pub fn bellman_ford(graph: &Graph, source: u64) -> GraphResult<SingleSourceResult> {
    let s = graph.require(source, "source")?;
    let n = graph.node_count();
    let edges = graph.edges();

    let mut distances = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    distances[s] = 0.0;

    for _ in 1..n {
        let mut updated = false;
        for (pos, edge) in edges.iter().enumerate() {
            let (u, v) = graph.endpoints(pos);
            if distances[u] == f64::INFINITY {
                continue;
            }
            let candidate = distances[u] + edge.weight;
            if candidate < distances[v] {
                distances[v] = candidate;
                parent[v] = Some(u);
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    let witness = edges.iter().enumerate().find_map(|(pos, edge)| {
        let (u, v) = graph.endpoints(pos);
        (distances[u] != f64::INFINITY && distances[u] + edge.weight < distances[v])
            .then_some((u, v))
    });

    if let Some((u, v)) = witness {
        parent[v] = Some(u);
        let cycle = negative_cycle(graph, &parent, v);
        log::warn!(
            "Negative cycle reachable from {} through {:?}",
            source,
            cycle
        );
        return Ok(SingleSourceResult {
            source,
            reached: BTreeMap::new(),
            negative_cycle: Some(cycle),
        });
    }

    let reached = (0..n)
        .filter(|&i| distances[i] != f64::INFINITY)
        .filter_map(|i| {
            let path = trace_path(graph, &parent, s, i)?;
            Some((
                graph.id_at(i),
                Reached {
                    distance: distances[i],
                    path,
                },
            ))
        })
        .collect();

    Ok(SingleSourceResult {
        source,
        reached,
        negative_cycle: None,
    })
}

/// Recover the cycle behind a still-relaxable node.
///
/// Stepping back V times from the witness is guaranteed to land on the cycle;
/// the loop is then followed until it closes.
fn negative_cycle(graph: &Graph, parent: &[Option<usize>], witness: usize) -> Vec<u64> {
    let mut on_cycle = witness;
    for _ in 0..graph.node_count() {
        match parent[on_cycle] {
            Some(p) => on_cycle = p,
            None => return vec![graph.id_at(witness)],
        }
    }

    let mut cycle = vec![graph.id_at(on_cycle)];
    let mut current = parent[on_cycle];
    while let Some(node) = current {
        if node == on_cycle || cycle.len() > graph.node_count() {
            break;
        }
        cycle.push(graph.id_at(node));
        current = parent[node];
    }
    cycle.reverse();
    cycle
}
