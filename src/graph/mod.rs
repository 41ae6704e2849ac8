//! In-memory graph model and connectivity.

pub mod builder;
pub mod network_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use network_graph::Graph;
pub use traversal::connected_components;
