//! Network nodes.

use serde::{Deserialize, Serialize};

/// A labelled vertex with optional planar coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within a graph.
    pub id: u64,
    /// Display label.
    pub label: String,
    /// Planar position `(x, y)`, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<(f64, f64)>,
}

impl Node {
    /// Create a node without coordinates.
    pub fn new(id: u64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            position: None,
        }
    }

    /// Attach planar coordinates.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some((x, y));
        self
    }
}
