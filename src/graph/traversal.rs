//! Weak connectivity over the graph.

use std::collections::VecDeque;

use super::Graph;

/// Weakly connected components, each listed in BFS order.
///
/// Components are ordered by their first node in graph order, which makes the
/// first entry of each component a stable representative.
pub fn connected_components(graph: &Graph) -> Vec<Vec<u64>> {
    let n = graph.node_count();
    let mut seen = vec![false; n];
    let mut components = Vec::new();

    for root in 0..n {
        if seen[root] {
            continue;
        }
        seen[root] = true;
        let mut members = vec![graph.id_at(root)];
        let mut queue = VecDeque::from([root]);
        while let Some(current) = queue.pop_front() {
            for next in undirected_neighbors(graph, current) {
                if !seen[next] {
                    seen[next] = true;
                    members.push(graph.id_at(next));
                    queue.push_back(next);
                }
            }
        }
        components.push(members);
    }

    components
}

/// Dense neighbours across outgoing and incoming edges alike.
fn undirected_neighbors(graph: &Graph, node: usize) -> impl Iterator<Item = usize> + '_ {
    let out = graph.outgoing_at(node).iter().map(|&e| graph.endpoints(e).1);
    let into = graph.incoming_at(node).iter().map(|&e| graph.endpoints(e).0);
    out.chain(into)
}
