//! Core graph structure: nodes and edges with adjacency indexes.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Node, UndirectedEdge};

/// An immutable, validated network snapshot.
///
/// Nodes keep their insertion order and are addressed internally by a dense
/// index (`0..node_count()`), which is what the algorithms work on. Edges keep
/// their insertion order too; parallel edges and self-loops are preserved.
#[derive(Debug, Clone)]
pub struct Graph {
    /// All nodes, in insertion order.
    nodes: Vec<Node>,
    /// Node ID -> dense index.
    index: HashMap<u64, usize>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Dense endpoints of each edge: (from, to).
    endpoints: Vec<(usize, usize)>,
    /// Adjacency index: dense node -> outgoing edge positions.
    outgoing: Vec<Vec<usize>>,
    /// Reverse adjacency: dense node -> incoming edge positions.
    incoming: Vec<Vec<usize>>,
}

impl Graph {
    /// Validate and index a node/edge collection.
    ///
    /// Fails on duplicate node IDs, edges whose endpoints are missing,
    /// non-finite weights, and negative or non-finite capacities.
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id, i).is_some() {
                return Err(GraphError::DuplicateNode(node.id));
            }
        }

        let mut outgoing = vec![Vec::new(); nodes.len()];
        let mut incoming = vec![Vec::new(); nodes.len()];
        let mut endpoints = Vec::with_capacity(edges.len());

        for (pos, edge) in edges.iter().enumerate() {
            let from = *index.get(&edge.from).ok_or(GraphError::MissingNode {
                edge: pos,
                node: edge.from,
            })?;
            let to = *index.get(&edge.to).ok_or(GraphError::MissingNode {
                edge: pos,
                node: edge.to,
            })?;
            if !edge.weight.is_finite() {
                return Err(GraphError::InvalidWeight {
                    edge: pos,
                    weight: edge.weight,
                });
            }
            if !edge.capacity.is_finite() || edge.capacity < 0.0 {
                return Err(GraphError::InvalidCapacity {
                    edge: pos,
                    capacity: edge.capacity,
                });
            }
            outgoing[from].push(pos);
            incoming[to].push(pos);
            endpoints.push((from, to));
        }

        log::debug!(
            "Built graph with {} nodes and {} edges",
            nodes.len(),
            edges.len()
        );

        Ok(Self {
            nodes,
            index,
            edges,
            endpoints,
            outgoing,
            incoming,
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node with this ID exists.
    pub fn contains(&self, id: u64) -> bool {
        self.index.contains_key(&id)
    }

    /// Get a node by ID.
    pub fn node(&self, id: u64) -> Option<&Node> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Get all nodes (immutable slice, insertion order).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get all edges (immutable slice, insertion order).
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Outgoing edges of a node, in insertion order. Empty for unknown IDs.
    pub fn neighbors(&self, id: u64) -> impl Iterator<Item = &Edge> + '_ {
        self.index
            .get(&id)
            .into_iter()
            .flat_map(move |&i| self.outgoing[i].iter().map(move |&e| &self.edges[e]))
    }

    /// Incoming edges of a node, in insertion order. Empty for unknown IDs.
    pub fn incoming(&self, id: u64) -> impl Iterator<Item = &Edge> + '_ {
        self.index
            .get(&id)
            .into_iter()
            .flat_map(move |&i| self.incoming[i].iter().map(move |&e| &self.edges[e]))
    }

    /// Dense index of a node ID.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Node ID at a dense index.
    ///
    /// # Panics
    /// If `index >= node_count()`.
    pub fn id_at(&self, index: usize) -> u64 {
        self.nodes[index].id
    }

    /// Dense index of an endpoint, or `UnknownNode` naming its role.
    pub fn require(&self, id: u64, role: &'static str) -> GraphResult<usize> {
        self.index_of(id)
            .ok_or(GraphError::UnknownNode { role, id })
    }

    /// Dense `(from, to)` of the edge at `pos`.
    pub(crate) fn endpoints(&self, pos: usize) -> (usize, usize) {
        self.endpoints[pos]
    }

    /// Outgoing edge positions of the node at a dense index.
    pub(crate) fn outgoing_at(&self, index: usize) -> &[usize] {
        &self.outgoing[index]
    }

    /// Incoming edge positions of the node at a dense index.
    pub(crate) fn incoming_at(&self, index: usize) -> &[usize] {
        &self.incoming[index]
    }

    /// The undirected projection: one candidate per directed edge, in edge order.
    ///
    /// Antiparallel and parallel edges are all kept, self-loops included.
    pub fn undirected_edges(&self) -> Vec<UndirectedEdge> {
        self.edges
            .iter()
            .zip(&self.endpoints)
            .enumerate()
            .map(|(pos, (edge, &(a, b)))| UndirectedEdge {
                index: pos,
                a,
                b,
                weight: edge.weight,
            })
            .collect()
    }

    /// Number of edges with a negative weight.
    pub fn negative_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.weight < 0.0).count()
    }

    /// Number of self-loops.
    pub fn self_loop_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_self_loop()).count()
    }
}
