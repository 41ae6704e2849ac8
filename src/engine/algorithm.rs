//! The closed set of algorithms the engine can dispatch to.

use serde::Serialize;

use crate::types::{GraphError, GraphResult};

/// A supported algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Single-pair shortest path over non-negative weights.
    Dijkstra,
    /// Minimum spanning forest, grown from one node at a time.
    Prim,
    /// Minimum spanning forest, built from sorted edges.
    Kruskal,
    /// Maximum flow between a source and a sink (Edmonds-Karp).
    MaxFlow,
    /// All-pairs shortest distances.
    FloydWarshall,
    /// Single-source distances with negative weights allowed.
    BellmanFord,
}

/// Whether an endpoint parameter is needed by an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Must be supplied.
    Required,
    /// May be supplied; validated when present.
    Optional,
    /// Ignored.
    Unused,
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: [Algorithm; 6] = [
        Self::Dijkstra,
        Self::Prim,
        Self::Kruskal,
        Self::MaxFlow,
        Self::FloydWarshall,
        Self::BellmanFord,
    ];

    /// Return the canonical name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
            Self::MaxFlow => "ford_fulkerson",
            Self::FloydWarshall => "floyd_warshall",
            Self::BellmanFord => "bellman_ford",
        }
    }

    /// Parse an algorithm from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "dijkstra" => Some(Self::Dijkstra),
            "prim" => Some(Self::Prim),
            "kruskal" => Some(Self::Kruskal),
            "ford_fulkerson" | "max_flow" | "maxflow" | "edmonds_karp" => Some(Self::MaxFlow),
            "floyd_warshall" | "floydwarshall" => Some(Self::FloydWarshall),
            "bellman_ford" | "bellmanford" => Some(Self::BellmanFord),
            _ => None,
        }
    }

    /// Parse an algorithm name, failing with `UnsupportedAlgorithm`.
    pub fn parse(name: &str) -> GraphResult<Self> {
        Self::from_name(name).ok_or_else(|| GraphError::UnsupportedAlgorithm(name.to_string()))
    }

    /// How this algorithm uses a source node.
    pub fn source(&self) -> Requirement {
        match self {
            Self::Dijkstra | Self::MaxFlow | Self::BellmanFord => Requirement::Required,
            Self::FloydWarshall => Requirement::Optional,
            Self::Prim | Self::Kruskal => Requirement::Unused,
        }
    }

    /// How this algorithm uses a target node.
    pub fn target(&self) -> Requirement {
        match self {
            Self::Dijkstra | Self::MaxFlow => Requirement::Required,
            Self::FloydWarshall | Self::BellmanFord => Requirement::Optional,
            Self::Prim | Self::Kruskal => Requirement::Unused,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
