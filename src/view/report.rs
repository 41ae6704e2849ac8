//! JSON response shapes for engine results and errors.

use serde_json::{json, Value};

use crate::config::DisplayConfig;
use crate::engine::{Algorithm, AlgorithmResult};
use crate::types::GraphError;

use super::window::{sample_reachable, window_matrix};

/// Shape a finished result for a caller.
///
/// Large results are windowed according to `display`: a distance matrix is
/// cut to `matrix_rows x matrix_cols` unless a reachable source/target pair
/// was requested, and a single-source result lists at most
/// `reachable_sample` nodes unless the target was reached.
pub fn render_result(
    algorithm: Algorithm,
    result: &AlgorithmResult,
    source: Option<u64>,
    target: Option<u64>,
    display: &DisplayConfig,
) -> Value {
    let mut body = match result {
        AlgorithmResult::ShortestPath(path) => json!({
            "path": path.path,
            "distance": path.distance,
        }),
        AlgorithmResult::SpanningTree(tree) => json!({
            "mst": tree.edges,
            "total_weight": tree.total_weight,
            "components": tree.components,
        }),
        AlgorithmResult::MaxFlow(flow) => json!({
            "max_flow": flow.value,
            "flows": flow.flows,
            "min_cut": flow.min_cut,
        }),
        AlgorithmResult::AllPairs(matrix) => {
            let pair = source
                .zip(target)
                .and_then(|(s, t)| matrix.path(s, t));
            match pair {
                Some(path) => json!({
                    "path": path.path,
                    "distance": path.distance,
                    "total_nodes": matrix.len(),
                }),
                None => json!({
                    "distances_sample": window_matrix(matrix, display.matrix_rows, display.matrix_cols),
                    "note": format!(
                        "Showing at most {}x{} entries; all {} x {} distances were computed.",
                        display.matrix_rows,
                        display.matrix_cols,
                        matrix.len(),
                        matrix.len()
                    ),
                    "total_nodes": matrix.len(),
                }),
            }
        }
        AlgorithmResult::SingleSource(single) => {
            match target.and_then(|t| single.path_to(t)) {
                Some(path) => json!({
                    "path": path.path,
                    "distance": path.distance,
                    "reachable_nodes": single.reachable_count(),
                }),
                None => json!({
                    "distances_sample": sample_reachable(single, display.reachable_sample),
                    "reachable_nodes": single.reachable_count(),
                }),
            }
        }
    };

    if let Value::Object(map) = &mut body {
        map.insert("algorithm".to_string(), json!(algorithm.name()));
    }
    body
}

/// Shape an error as `{"error": {"kind", "message"}}`.
pub fn render_error(err: &GraphError) -> Value {
    json!({ "error": err.report() })
}
