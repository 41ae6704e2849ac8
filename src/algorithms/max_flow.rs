//! Maximum flow via Edmonds-Karp (BFS-based Ford-Fulkerson).
//!
//! The residual graph keeps one forward/reverse arc pair per original edge,
//! so parallel edges carry independent flows.

use std::collections::{BTreeMap, VecDeque};

use crate::graph::Graph;
use crate::types::{FlowResult, GraphError, GraphResult, DEFAULT_FLOW_EPSILON};

/// One direction of a residual edge.
#[derive(Debug, Clone, Copy)]
struct Arc {
    to: usize,
    residual: f64,
    /// Position of the paired arc in the arc list.
    twin: usize,
}

/// Residual network built from the original capacities.
struct Residual {
    arcs: Vec<Arc>,
    /// Dense node -> arc positions leaving it.
    out: Vec<Vec<usize>>,
    /// Original edge position -> its forward arc, `None` for self-loops.
    forward: Vec<Option<usize>>,
}

impl Residual {
    fn new(graph: &Graph) -> Self {
        let mut arcs = Vec::with_capacity(graph.edge_count() * 2);
        let mut out = vec![Vec::new(); graph.node_count()];
        let mut forward = Vec::with_capacity(graph.edge_count());

        for (pos, edge) in graph.edges().iter().enumerate() {
            let (u, v) = graph.endpoints(pos);
            if u == v {
                forward.push(None);
                continue;
            }
            let fwd = arcs.len();
            arcs.push(Arc {
                to: v,
                residual: edge.capacity,
                twin: fwd + 1,
            });
            arcs.push(Arc {
                to: u,
                residual: 0.0,
                twin: fwd,
            });
            out[u].push(fwd);
            out[v].push(fwd + 1);
            forward.push(Some(fwd));
        }

        Self { arcs, out, forward }
    }

    /// BFS over arcs with residual above `epsilon`.
    ///
    /// Returns the arc used to enter each node; stops early once `sink` is found.
    fn bfs(&self, source: usize, sink: Option<usize>, epsilon: f64) -> Vec<Option<usize>> {
        let mut via: Vec<Option<usize>> = vec![None; self.out.len()];
        let mut seen = vec![false; self.out.len()];
        let mut queue = VecDeque::from([source]);
        seen[source] = true;

        while let Some(u) = queue.pop_front() {
            for &a in &self.out[u] {
                let arc = self.arcs[a];
                if seen[arc.to] || arc.residual <= epsilon {
                    continue;
                }
                seen[arc.to] = true;
                via[arc.to] = Some(a);
                if Some(arc.to) == sink {
                    return via;
                }
                queue.push_back(arc.to);
            }
        }

        via
    }

    /// Node that `arc` leaves from.
    fn tail(&self, arc: usize) -> usize {
        self.arcs[self.arcs[arc].twin].to
    }
}

/// Maximum flow from `source` to `target` with the default saturation epsilon.
pub fn max_flow(graph: &Graph, source: u64, target: u64) -> GraphResult<FlowResult> {
    max_flow_with_epsilon(graph, source, target, DEFAULT_FLOW_EPSILON)
}

/// Maximum flow from `source` to `target`.
///
/// Residual capacities at or below `epsilon` count as saturated; `epsilon`
/// must be finite and non-negative. Disconnected endpoints yield a zero flow,
/// which is not an error.
///
/// Time: O(V * E^2).
pub fn max_flow_with_epsilon(
    graph: &Graph,
    source: u64,
    target: u64,
    epsilon: f64,
) -> GraphResult<FlowResult> {
    let s = graph.require(source, "source")?;
    let t = graph.require(target, "target")?;
    if s == t {
        return Err(GraphError::SameEndpoints(source));
    }
    if !(epsilon.is_finite() && epsilon >= 0.0) {
        return Err(GraphError::InvalidEpsilon(epsilon));
    }

    let mut residual = Residual::new(graph);
    let mut value = 0.0;
    let mut augmentations = 0usize;

    loop {
        let via = residual.bfs(s, Some(t), epsilon);
        if via[t].is_none() {
            break;
        }

        let mut bottleneck = f64::INFINITY;
        let mut node = t;
        while node != s {
            let Some(a) = via[node] else { break };
            bottleneck = bottleneck.min(residual.arcs[a].residual);
            node = residual.tail(a);
        }
        if bottleneck <= epsilon {
            break;
        }

        let mut node = t;
        while node != s {
            let Some(a) = via[node] else { break };
            let twin = residual.arcs[a].twin;
            residual.arcs[a].residual -= bottleneck;
            residual.arcs[twin].residual += bottleneck;
            node = residual.tail(a);
        }

        value += bottleneck;
        augmentations += 1;
    }

    let mut flows: BTreeMap<u64, BTreeMap<u64, f64>> = BTreeMap::new();
    let mut edge_flows = Vec::with_capacity(graph.edge_count());
    for (edge, fwd) in graph.edges().iter().zip(&residual.forward) {
        let flow = match fwd {
            Some(a) => (edge.capacity - residual.arcs[*a].residual).clamp(0.0, edge.capacity),
            None => 0.0,
        };
        edge_flows.push(flow);
        *flows.entry(edge.from).or_default().entry(edge.to).or_insert(0.0) += flow;
    }

    let via = residual.bfs(s, None, epsilon);
    let min_cut = (0..graph.node_count())
        .filter(|&i| i == s || via[i].is_some())
        .map(|i| graph.id_at(i))
        .collect();

    log::debug!(
        "Max flow {} -> {} = {} after {} augmenting paths",
        source,
        target,
        value,
        augmentations
    );

    Ok(FlowResult {
        value,
        flows,
        edge_flows,
        min_cut,
    })
}
