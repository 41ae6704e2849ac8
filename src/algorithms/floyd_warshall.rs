//! Floyd-Warshall algorithm for all-pairs shortest paths.
//!
//! Dense distance matrix plus a predecessor matrix updated alongside it, so
//! any pair's path can be replayed without re-running a search. Negative edge
//! weights are fine; negative cycles are reported as errors.

use std::collections::{BTreeMap, HashMap};

use serde::{Serialize, Serializer};

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, PathResult};

/// All-pairs shortest distances in graph node order.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    ids: Vec<u64>,
    index: HashMap<u64, usize>,
    /// Row-major `n x n` distances; infinity where unreachable.
    dist: Vec<f64>,
    /// `pred[i * n + j]` is the node before `j` on the shortest `i -> j` path.
    pred: Vec<Option<usize>>,
}

impl DistanceMatrix {
    /// Node IDs in row/column order.
    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Shortest distance from `source` to `target`, `None` if unreachable or unknown.
    pub fn distance(&self, source: u64, target: u64) -> Option<f64> {
        let i = *self.index.get(&source)?;
        let j = *self.index.get(&target)?;
        let d = self.dist[i * self.len() + j];
        d.is_finite().then_some(d)
    }

    /// Replay the shortest path for one pair from the predecessor matrix.
    pub fn path(&self, source: u64, target: u64) -> Option<PathResult> {
        let distance = self.distance(source, target)?;
        let n = self.len();
        let i = self.index[&source];
        let mut j = self.index[&target];

        let mut path = vec![self.ids[j]];
        while j != i {
            if path.len() > n {
                return None;
            }
            j = self.pred[i * n + j]?;
            path.push(self.ids[j]);
        }
        path.reverse();

        Some(PathResult { path, distance })
    }

    /// Reachable targets of one source with their distances.
    pub fn row(&self, source: u64) -> Option<BTreeMap<u64, f64>> {
        let i = *self.index.get(&source)?;
        let n = self.len();
        Some(
            (0..n)
                .filter_map(|j| {
                    let d = self.dist[i * n + j];
                    d.is_finite().then_some((self.ids[j], d))
                })
                .collect(),
        )
    }

    /// Every reachable pair as `source -> target -> distance`.
    pub fn to_map(&self) -> BTreeMap<u64, BTreeMap<u64, f64>> {
        self.ids
            .iter()
            .filter_map(|&id| self.row(id).map(|row| (id, row)))
            .collect()
    }

    /// Number of reachable ordered pairs, diagonal included.
    pub fn reachable_pairs(&self) -> usize {
        self.dist.iter().filter(|d| d.is_finite()).count()
    }
}

impl Serialize for DistanceMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// Parallel edges contribute their minimum weight. A negative self-loop seeds
/// a negative diagonal entry and is therefore reported as a negative cycle.
///
/// Time: O(V^3), Memory: O(V^2)
pub fn floyd_warshall(graph: &Graph) -> GraphResult<DistanceMatrix> {
    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n * n];
    let mut pred: Vec<Option<usize>> = vec![None; n * n];

    for i in 0..n {
        dist[i * n + i] = 0.0;
    }
    for (pos, edge) in graph.edges().iter().enumerate() {
        let (u, v) = graph.endpoints(pos);
        if edge.weight < dist[u * n + v] {
            dist[u * n + v] = edge.weight;
            pred[u * n + v] = Some(u);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[i * n + k];
            if d_ik == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let through_k = d_ik + dist[k * n + j];
                if through_k < dist[i * n + j] {
                    dist[i * n + j] = through_k;
                    pred[i * n + j] = pred[k * n + j];
                }
            }
        }
    }

    let on_negative_cycle: Vec<u64> = (0..n)
        .filter(|&i| dist[i * n + i] < 0.0)
        .map(|i| graph.id_at(i))
        .collect();
    if !on_negative_cycle.is_empty() {
        log::warn!(
            "Floyd-Warshall found {} nodes on negative cycles",
            on_negative_cycle.len()
        );
        return Err(GraphError::NegativeCycle(on_negative_cycle));
    }

    let ids: Vec<u64> = graph.nodes().iter().map(|node| node.id).collect();
    let index = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    Ok(DistanceMatrix {
        ids,
        index,
        dist,
        pred,
    })
}
