//! Engine facade: validates endpoints and routes to one algorithm.

use serde::Serialize;

use crate::algorithms::{
    bellman_ford, dijkstra, floyd_warshall, kruskal, max_flow_with_epsilon, prim, DistanceMatrix,
};
use crate::config::EngineConfig;
use crate::graph::Graph;
use crate::types::{
    FlowResult, GraphError, GraphResult, PathResult, SingleSourceResult, TreeResult,
    DEFAULT_FLOW_EPSILON,
};

use super::algorithm::{Algorithm, Requirement};

/// Result of one engine query, tagged by shape.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "result", rename_all = "snake_case")]
pub enum AlgorithmResult {
    /// Dijkstra.
    ShortestPath(PathResult),
    /// Prim or Kruskal.
    SpanningTree(TreeResult),
    /// Edmonds-Karp.
    MaxFlow(FlowResult),
    /// Floyd-Warshall.
    AllPairs(DistanceMatrix),
    /// Bellman-Ford, always free of negative cycles.
    SingleSource(SingleSourceResult),
}

/// Routes named or typed algorithm requests to the algorithm components.
///
/// Holds only configuration; every query borrows its own graph.
#[derive(Debug, Clone)]
pub struct Engine {
    flow_epsilon: f64,
}

impl Engine {
    /// Create an engine with default settings.
    pub fn new() -> Self {
        Self {
            flow_epsilon: DEFAULT_FLOW_EPSILON,
        }
    }

    /// Create an engine from a loaded configuration.
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            flow_epsilon: config.flow.epsilon,
        }
    }

    /// Run an algorithm selected by name.
    pub fn run(
        &self,
        name: &str,
        graph: &Graph,
        source: Option<u64>,
        target: Option<u64>,
    ) -> GraphResult<AlgorithmResult> {
        let algorithm = match Algorithm::parse(name) {
            Ok(algorithm) => algorithm,
            Err(e) => {
                log::warn!("{}", e);
                return Err(e);
            }
        };
        self.execute(algorithm, graph, source, target)
    }

    /// Run a typed algorithm.
    ///
    /// Required endpoints must be present and exist; optional ones must exist
    /// when given. A Bellman-Ford negative cycle is surfaced as an error.
    pub fn execute(
        &self,
        algorithm: Algorithm,
        graph: &Graph,
        source: Option<u64>,
        target: Option<u64>,
    ) -> GraphResult<AlgorithmResult> {
        log::debug!(
            "Dispatching {} (source={:?}, target={:?}) over {} nodes",
            algorithm,
            source,
            target,
            graph.node_count()
        );

        let outcome = self.dispatch(algorithm, graph, source, target);
        if let Err(e) = &outcome {
            log::warn!("{} failed: {}", algorithm, e);
        }
        outcome
    }

    fn dispatch(
        &self,
        algorithm: Algorithm,
        graph: &Graph,
        source: Option<u64>,
        target: Option<u64>,
    ) -> GraphResult<AlgorithmResult> {
        let source = endpoint(graph, "source", algorithm.source(), source)?;
        let target = endpoint(graph, "target", algorithm.target(), target)?;
        let missing = |role: &'static str| GraphError::MissingEndpoint {
            algorithm: algorithm.name(),
            role,
        };

        Ok(match (algorithm, source, target) {
            (Algorithm::Dijkstra, Some(s), Some(t)) => {
                AlgorithmResult::ShortestPath(dijkstra(graph, s, t)?)
            }
            (Algorithm::MaxFlow, Some(s), Some(t)) => {
                AlgorithmResult::MaxFlow(max_flow_with_epsilon(graph, s, t, self.flow_epsilon)?)
            }
            (Algorithm::Dijkstra | Algorithm::MaxFlow | Algorithm::BellmanFord, None, _) => {
                return Err(missing("source"))
            }
            (Algorithm::Dijkstra | Algorithm::MaxFlow, _, None) => return Err(missing("target")),
            (Algorithm::BellmanFord, Some(s), _) => {
                let result = bellman_ford(graph, s)?;
                if let Some(cycle) = result.negative_cycle {
                    return Err(GraphError::NegativeCycle(cycle));
                }
                AlgorithmResult::SingleSource(result)
            }
            (Algorithm::Prim, ..) => AlgorithmResult::SpanningTree(prim(graph)),
            (Algorithm::Kruskal, ..) => AlgorithmResult::SpanningTree(kruskal(graph)),
            (Algorithm::FloydWarshall, ..) => AlgorithmResult::AllPairs(floyd_warshall(graph)?),
        })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Check that a supplied endpoint exists. Unused endpoints are dropped.
fn endpoint(
    graph: &Graph,
    role: &'static str,
    requirement: Requirement,
    id: Option<u64>,
) -> GraphResult<Option<u64>> {
    match (requirement, id) {
        (Requirement::Unused, _) | (_, None) => Ok(None),
        (_, Some(id)) => {
            graph.require(id, role)?;
            Ok(Some(id))
        }
    }
}
