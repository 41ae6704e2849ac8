//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphResult, Node};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Nothing is validated until [`GraphBuilder::build`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without coordinates.
    pub fn node(&mut self, id: u64, label: &str) -> &mut Self {
        self.nodes.push(Node::new(id, label));
        self
    }

    /// Add a node at a planar position.
    pub fn node_at(&mut self, id: u64, label: &str, x: f64, y: f64) -> &mut Self {
        self.nodes.push(Node::new(id, label).at(x, y));
        self
    }

    /// Add nodes labelled by their own ID.
    pub fn nodes(&mut self, ids: impl IntoIterator<Item = u64>) -> &mut Self {
        for id in ids {
            self.nodes.push(Node::new(id, id.to_string()));
        }
        self
    }

    /// Add a directed edge with zero capacity.
    pub fn edge(&mut self, from: u64, to: u64, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Add a directed edge with a capacity.
    pub fn edge_with_capacity(
        &mut self,
        from: u64,
        to: u64,
        weight: f64,
        capacity: f64,
    ) -> &mut Self {
        self.edges
            .push(Edge::with_capacity(from, to, weight, capacity));
        self
    }

    /// Add an unweighted edge carrying only a capacity.
    pub fn pipe(&mut self, from: u64, to: u64, capacity: f64) -> &mut Self {
        self.edge_with_capacity(from, to, 1.0, capacity)
    }

    /// Validate and build the final Graph.
    pub fn build(&mut self) -> GraphResult<Graph> {
        Graph::build(
            std::mem::take(&mut self.nodes),
            std::mem::take(&mut self.edges),
        )
    }
}
