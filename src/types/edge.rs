//! Directed, weighted and capacitated edges.

use serde::{Deserialize, Serialize};

/// A directed link between two nodes.
///
/// `weight` is the path cost used by the shortest-path and spanning-tree
/// algorithms (the dataset's latency); it may be negative. `capacity` is
/// only read by max-flow and must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Origin node ID.
    pub from: u64,
    /// Destination node ID.
    pub to: u64,
    /// Path cost.
    pub weight: f64,
    /// Maximum flow this edge can carry.
    pub capacity: f64,
}

impl Edge {
    /// Create an edge with zero capacity.
    pub fn new(from: u64, to: u64, weight: f64) -> Self {
        Self {
            from,
            to,
            weight,
            capacity: 0.0,
        }
    }

    /// Create an edge with both a weight and a capacity.
    pub fn with_capacity(from: u64, to: u64, weight: f64, capacity: f64) -> Self {
        Self {
            from,
            to,
            weight,
            capacity,
        }
    }

    /// True when both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// One candidate edge of the undirected projection used by spanning trees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndirectedEdge {
    /// Position of the originating directed edge in the graph's edge list.
    pub index: usize,
    /// Dense index of the first endpoint.
    pub a: usize,
    /// Dense index of the second endpoint.
    pub b: usize,
    /// Edge weight.
    pub weight: f64,
}
