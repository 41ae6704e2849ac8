//! Result objects produced by the algorithms.

use std::collections::BTreeMap;

use serde::Serialize;

/// A point-to-point shortest path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    /// Node IDs from source to target, both inclusive.
    pub path: Vec<u64>,
    /// Sum of the traversed edge weights.
    pub distance: f64,
}

impl PathResult {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// An edge selected into a spanning tree, in its original orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeEdge {
    pub from: u64,
    pub to: u64,
    pub weight: f64,
}

/// A minimum spanning tree, or forest when the projection is disconnected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeResult {
    /// Selected edges, in the order the algorithm accepted them.
    pub edges: Vec<TreeEdge>,
    /// Sum of the selected edge weights across all components.
    pub total_weight: f64,
    /// Number of trees in the forest (isolated nodes count as one each).
    pub components: usize,
}

impl TreeResult {
    /// True when the whole graph is spanned by a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}

/// Maximum flow between a source and a sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowResult {
    /// Total flow leaving the source.
    pub value: f64,
    /// Flow per ordered pair `from -> to -> flow`, summed over parallel edges.
    pub flows: BTreeMap<u64, BTreeMap<u64, f64>>,
    /// Flow on each original edge, indexed like `Graph::edges()`.
    #[serde(skip)]
    pub edge_flows: Vec<f64>,
    /// Source side of a minimum cut: nodes still reachable in the final residual graph.
    pub min_cut: Vec<u64>,
}

impl FlowResult {
    /// Flow pushed from `from` to `to` across all parallel edges.
    pub fn flow_between(&self, from: u64, to: u64) -> f64 {
        self.flows
            .get(&from)
            .and_then(|row| row.get(&to))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Distance and path to one node reached from a single source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reached {
    pub distance: f64,
    pub path: Vec<u64>,
}

/// Single-source shortest paths, or the negative cycle that prevents them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleSourceResult {
    /// The source the distances are measured from.
    pub source: u64,
    /// Every reachable node. Empty when a negative cycle was found.
    pub reached: BTreeMap<u64, Reached>,
    /// Node IDs of a negative cycle reachable from the source, in cycle order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_cycle: Option<Vec<u64>>,
}

impl SingleSourceResult {
    /// True when a negative cycle reachable from the source was found.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Distance to `id`, or `None` when unreachable.
    pub fn distance(&self, id: u64) -> Option<f64> {
        self.reached.get(&id).map(|r| r.distance)
    }

    /// Path to `id` as a [`PathResult`], or `None` when unreachable.
    pub fn path_to(&self, id: u64) -> Option<PathResult> {
        self.reached.get(&id).map(|r| PathResult {
            path: r.path.clone(),
            distance: r.distance,
        })
    }

    /// Number of reachable nodes, the source included.
    pub fn reachable_count(&self) -> usize {
        self.reached.len()
    }
}
