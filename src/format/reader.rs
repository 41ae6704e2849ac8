//! Reads JSON network datasets into in-memory graphs.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::graph::Graph;
use crate::types::{Edge, GraphResult, Node};

/// Node row as it appears in a dataset.
#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: u64,
    #[serde(default, alias = "label")]
    name: Option<String>,
    #[serde(default)]
    x: Option<f64>,
    #[serde(default)]
    y: Option<f64>,
}

/// Edge row as it appears in a dataset.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    from: u64,
    to: u64,
    #[serde(alias = "weight")]
    latency: f64,
    #[serde(default)]
    capacity: f64,
}

#[derive(Debug, Deserialize)]
struct DatasetRecord {
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

/// A node/edge collection as loaded, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Dataset {
    /// Validate and build a fresh graph from this collection.
    pub fn into_graph(self) -> GraphResult<Graph> {
        Graph::build(self.nodes, self.edges)
    }
}

/// Reader for JSON dataset files.
///
/// Expected shape:
/// `{"nodes": [{"id", "name", "x", "y"}], "edges": [{"from", "to", "latency", "capacity"}]}`.
/// `label` is accepted for `name` and `weight` for `latency`. Coordinates
/// and capacity are optional.
///
/// Node IDs (`id`, `from`, `to`) must be non-negative integers; a negative or
/// fractional ID fails with a `Parse` error.
pub struct DatasetReader;

impl DatasetReader {
    /// Read a dataset file into a Graph.
    pub fn read_from_file(path: &Path) -> GraphResult<Graph> {
        let file = std::fs::File::open(path)?;
        let dataset = Self::parse(std::io::BufReader::new(file))?;
        log::info!(
            "Loaded {} nodes and {} edges from {}",
            dataset.nodes.len(),
            dataset.edges.len(),
            path.display()
        );
        dataset.into_graph()
    }

    /// Read from any reader into a Graph.
    pub fn read_from(reader: impl Read) -> GraphResult<Graph> {
        Self::parse(reader)?.into_graph()
    }

    /// Parse a dataset held in a string into a Graph.
    pub fn read_str(json: &str) -> GraphResult<Graph> {
        Self::read_from(json.as_bytes())
    }

    /// Parse a dataset without validating it.
    pub fn parse(reader: impl Read) -> GraphResult<Dataset> {
        let record: DatasetRecord = serde_json::from_reader(reader)?;

        let nodes = record
            .nodes
            .into_iter()
            .map(|n| {
                let label = n.name.unwrap_or_else(|| {
                    log::debug!("Node {} has no name, labelling it by ID", n.id);
                    n.id.to_string()
                });
                let position = match (n.x, n.y) {
                    (Some(x), Some(y)) => Some((x, y)),
                    (None, None) => None,
                    _ => {
                        log::debug!("Node {} has a single coordinate, dropping it", n.id);
                        None
                    }
                };
                Node {
                    id: n.id,
                    label,
                    position,
                }
            })
            .collect();

        let edges = record
            .edges
            .into_iter()
            .map(|e| Edge::with_capacity(e.from, e.to, e.latency, e.capacity))
            .collect();

        Ok(Dataset { nodes, edges })
    }
}
