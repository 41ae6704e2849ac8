//! netgraph: graph algorithms over weighted, capacitated network datasets.
//!
//! A validated, immutable [`Graph`] is built per query; the six algorithms
//! (Dijkstra, Prim, Kruskal, Edmonds-Karp max flow, Floyd-Warshall,
//! Bellman-Ford) are pure functions over it, and the [`Engine`] routes
//! algorithm names to them with uniform error handling.

pub mod algorithms;
pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;
pub mod view;

// Re-export commonly used types at the crate root
pub use algorithms::{
    bellman_ford, dijkstra, floyd_warshall, kruskal, max_flow, prim, DistanceMatrix, UnionFind,
};
pub use config::{DisplayConfig, EngineConfig, FlowConfig};
pub use engine::{Algorithm, AlgorithmResult, Engine, Requirement};
pub use format::{Dataset, DatasetReader};
pub use graph::{connected_components, Graph, GraphBuilder};
pub use types::{
    Edge, ErrorKind, ErrorReport, FlowResult, GraphError, GraphResult, Node, PathResult, Reached,
    SingleSourceResult, TreeEdge, TreeResult,
};
