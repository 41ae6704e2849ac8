//! Phase 4 tests: engine facade, report shaping, and the CLI end to end.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::NamedTempFile;

use netgraph::config::DisplayConfig;
use netgraph::engine::{Algorithm, AlgorithmResult, Engine, Requirement};
use netgraph::format::DatasetReader;
use netgraph::graph::{Graph, GraphBuilder};
use netgraph::types::{ErrorKind, GraphError};
use netgraph::view::{
    render_error, render_result, sample_graph, sample_reachable, window_matrix,
};

// ==================== Helpers ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two networks in one file: the weighted diamond 1..4 and the pipes 5..7.
const NETWORK: &str = r#"{
    "nodes": [
        {"id": 1, "name": "a", "x": 0.0, "y": 0.0},
        {"id": 2, "name": "b", "x": 1.0, "y": 0.0},
        {"id": 3, "name": "c", "x": 1.0, "y": 1.0},
        {"id": 4, "name": "d", "x": 2.0, "y": 1.0},
        {"id": 5, "name": "s"},
        {"id": 6, "name": "m"},
        {"id": 7, "name": "t"}
    ],
    "edges": [
        {"from": 1, "to": 2, "latency": 1, "capacity": 3},
        {"from": 2, "to": 3, "latency": 2, "capacity": 2},
        {"from": 1, "to": 3, "latency": 5, "capacity": 1},
        {"from": 3, "to": 4, "latency": 1, "capacity": 4},
        {"from": 5, "to": 6, "latency": 1, "capacity": 3},
        {"from": 6, "to": 7, "latency": 1, "capacity": 2},
        {"from": 5, "to": 7, "latency": 1, "capacity": 1}
    ]
}"#;

fn network() -> Graph {
    DatasetReader::read_str(NETWORK).unwrap()
}

fn network_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(NETWORK.as_bytes()).unwrap();
    file
}

/// A line of `n` nodes, each 1 apart.
fn line(n: u64) -> Graph {
    let mut builder = GraphBuilder::new();
    builder.nodes(1..=n);
    for i in 1..n {
        builder.edge(i, i + 1, 1.0);
    }
    builder.build().unwrap()
}

fn kind_of(result: Result<AlgorithmResult, GraphError>) -> ErrorKind {
    match result {
        Ok(r) => panic!("Expected an error, got {:?}", r),
        Err(e) => e.kind(),
    }
}

// ==================== Algorithm Selection ====================

#[test]
fn test_algorithm_names_and_aliases() {
    let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
    assert_eq!(
        names,
        vec!["dijkstra", "prim", "kruskal", "ford_fulkerson", "floyd_warshall", "bellman_ford"]
    );
    for algorithm in Algorithm::ALL {
        assert_eq!(Algorithm::from_name(algorithm.name()), Some(algorithm));
    }
    assert_eq!(Algorithm::from_name("Max-Flow"), Some(Algorithm::MaxFlow));
    assert_eq!(Algorithm::from_name("edmonds_karp"), Some(Algorithm::MaxFlow));
    assert_eq!(Algorithm::from_name(" BellmanFord "), Some(Algorithm::BellmanFord));
    assert_eq!("floyd-warshall".parse::<Algorithm>().unwrap(), Algorithm::FloydWarshall);
    assert_eq!(Algorithm::from_name("a_star"), None);
}

#[test]
fn test_endpoint_requirements() {
    assert_eq!(Algorithm::Dijkstra.source(), Requirement::Required);
    assert_eq!(Algorithm::MaxFlow.target(), Requirement::Required);
    assert_eq!(Algorithm::BellmanFord.target(), Requirement::Optional);
    assert_eq!(Algorithm::FloydWarshall.source(), Requirement::Optional);
    assert_eq!(Algorithm::Kruskal.source(), Requirement::Unused);
}

// ==================== Engine Facade ====================

#[test]
fn test_engine_runs_every_algorithm() {
    init_logger();
    let graph = network();
    let engine = Engine::new();

    match engine.run("dijkstra", &graph, Some(1), Some(4)).unwrap() {
        AlgorithmResult::ShortestPath(p) => {
            assert_eq!(p.path, vec![1, 2, 3, 4]);
            assert_eq!(p.distance, 4.0);
        }
        other => panic!("Expected ShortestPath, got {:?}", other),
    }

    for name in ["prim", "kruskal"] {
        match engine.run(name, &graph, None, None).unwrap() {
            AlgorithmResult::SpanningTree(tree) => {
                // 4 for the diamond plus 2 for the pipes
                assert!((tree.total_weight - 6.0).abs() < 1e-9);
                assert_eq!(tree.components, 2);
            }
            other => panic!("Expected SpanningTree, got {:?}", other),
        }
    }

    match engine.run("ford_fulkerson", &graph, Some(5), Some(7)).unwrap() {
        AlgorithmResult::MaxFlow(flow) => assert!((flow.value - 3.0).abs() < 1e-9),
        other => panic!("Expected MaxFlow, got {:?}", other),
    }

    match engine.run("floyd_warshall", &graph, None, None).unwrap() {
        AlgorithmResult::AllPairs(matrix) => {
            assert_eq!(matrix.len(), 7);
            assert_eq!(matrix.distance(1, 4), Some(4.0));
            assert_eq!(matrix.distance(1, 7), None);
        }
        other => panic!("Expected AllPairs, got {:?}", other),
    }

    match engine.run("bellman_ford", &graph, Some(5), None).unwrap() {
        AlgorithmResult::SingleSource(single) => {
            assert_eq!(single.reachable_count(), 3);
            assert_eq!(single.distance(7), Some(1.0));
        }
        other => panic!("Expected SingleSource, got {:?}", other),
    }
}

#[test]
fn test_engine_unsupported_algorithm() {
    let graph = network();
    let err = Engine::new()
        .run("a_star", &graph, Some(1), Some(2))
        .unwrap_err();
    match err {
        GraphError::UnsupportedAlgorithm(ref name) => assert_eq!(name, "a_star"),
        ref e => panic!("Expected UnsupportedAlgorithm, got {:?}", e),
    }
    assert_eq!(err.kind(), ErrorKind::UnsupportedAlgorithm);
}

#[test]
fn test_engine_missing_endpoints() {
    let graph = network();
    let engine = Engine::new();

    match engine.execute(Algorithm::Dijkstra, &graph, Some(1), None) {
        Err(GraphError::MissingEndpoint {
            algorithm: "dijkstra",
            role: "target",
        }) => {}
        other => panic!("Expected MissingEndpoint, got {:?}", other),
    }
    assert!(matches!(
        engine.execute(Algorithm::MaxFlow, &graph, None, Some(7)),
        Err(GraphError::MissingEndpoint { role: "source", .. })
    ));
    assert_eq!(
        kind_of(engine.execute(Algorithm::BellmanFord, &graph, None, None)),
        ErrorKind::InvalidEndpoints
    );
}

#[test]
fn test_engine_unknown_endpoints() {
    let graph = network();
    let engine = Engine::new();

    assert_eq!(
        kind_of(engine.run("dijkstra", &graph, Some(1), Some(99))),
        ErrorKind::InvalidEndpoints
    );
    // Optional endpoints are validated when given.
    assert!(matches!(
        engine.run("floyd_warshall", &graph, Some(99), None),
        Err(GraphError::UnknownNode { role: "source", id: 99 })
    ));
    assert_eq!(
        kind_of(engine.run("bellman_ford", &graph, Some(1), Some(42))),
        ErrorKind::InvalidEndpoints
    );
    // Unused endpoints are ignored entirely.
    assert!(engine.run("kruskal", &graph, Some(99), Some(100)).is_ok());
    assert_eq!(
        kind_of(engine.run("ford_fulkerson", &graph, Some(5), Some(5))),
        ErrorKind::InvalidEndpoints
    );
}

#[test]
fn test_engine_path_and_cycle_errors() {
    let engine = Engine::new();
    assert_eq!(
        kind_of(engine.run("dijkstra", &network(), Some(4), Some(1))),
        ErrorKind::NoPathExists
    );

    let cyclic = GraphBuilder::new()
        .nodes([1, 2])
        .edge(1, 2, -1.0)
        .edge(2, 1, -1.0)
        .build()
        .unwrap();
    assert_eq!(
        kind_of(engine.run("bellman_ford", &cyclic, Some(1), None)),
        ErrorKind::NegativeCycleDetected
    );
    assert_eq!(
        kind_of(engine.run("floyd_warshall", &cyclic, None, None)),
        ErrorKind::NegativeCycleDetected
    );
}

#[test]
fn test_engine_uses_configured_epsilon() {
    let graph = GraphBuilder::new()
        .nodes([1, 2])
        .pipe(1, 2, 1e-4)
        .build()
        .unwrap();
    let mut config = netgraph::EngineConfig::default();
    config.flow.epsilon = 1e-3;

    let flow = |engine: Engine| match engine.run("max_flow", &graph, Some(1), Some(2)).unwrap() {
        AlgorithmResult::MaxFlow(flow) => flow.value,
        other => panic!("Expected MaxFlow, got {:?}", other),
    };
    assert!(flow(Engine::new()) > 0.0);
    assert_eq!(flow(Engine::with_config(&config)), 0.0);
}

#[test]
fn test_engine_with_negative_epsilon_fails_fast() {
    let graph = GraphBuilder::new()
        .nodes([1, 2])
        .pipe(1, 2, 3.0)
        .build()
        .unwrap();
    let config: netgraph::EngineConfig = toml::from_str("[flow]\nepsilon = -1.0\n").unwrap();

    let engine = Engine::with_config(&config);
    assert_eq!(
        kind_of(engine.run("ford_fulkerson", &graph, Some(1), Some(2))),
        ErrorKind::Parse
    );
}

#[test]
fn test_cli_rejects_invalid_config_epsilon() {
    let file = network_file();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[flow]\nepsilon = -1.0").unwrap();

    let output = run_ngraph(&[
        "--config",
        config.path().to_str().unwrap(),
        "run",
        file.path().to_str().unwrap(),
        "ford_fulkerson",
        "--source",
        "5",
        "--target",
        "7",
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_engine_result_serializes_tagged() {
    let result = Engine::new()
        .run("dijkstra", &network(), Some(1), Some(2))
        .unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["kind"], "shortest_path");
    assert_eq!(value["result"]["path"], serde_json::json!([1, 2]));
}

// ==================== Presentation ====================

#[test]
fn test_window_matrix_is_bounded() {
    let matrix = netgraph::floyd_warshall(&line(15)).unwrap();
    let window = window_matrix(&matrix, 10, 3);
    assert_eq!(window.len(), 10);
    assert!(window.iter().all(|row| row.cells.len() == 3));
    assert_eq!(window[0].source, 1);
    assert_eq!(window[0].cells[2].distance, Some(2.0));
    assert_eq!(window[2].cells[0].distance, None);

    assert_eq!(window_matrix(&matrix, 100, 100).len(), 15);
}

#[test]
fn test_sample_reachable() {
    let single = netgraph::bellman_ford(&line(25), 3).unwrap();
    let sample = sample_reachable(&single, 10);
    assert_eq!(sample.len(), 10);
    assert_eq!(sample[0].node, 3);
    assert_eq!(sample[9].node, 12);
    assert_eq!(sample[9].distance, 9.0);
    assert_eq!(single.reachable_count(), 23);
}

#[test]
fn test_sample_graph_keeps_edges_among_kept_nodes() {
    let graph = line(300);
    let sample = sample_graph(&graph, 200);
    assert!(sample.truncated);
    assert_eq!(sample.nodes.len(), 200);
    assert_eq!(sample.edges.len(), 199);
    assert_eq!(sample.total_nodes, 300);
    assert_eq!(sample.total_edges, 299);
    assert!(sample.edges.iter().all(|e| e.to <= 200));

    let small = sample_graph(&network(), 200);
    assert!(!small.truncated);
    assert_eq!(small.nodes.len(), 7);
    assert_eq!(small.edges.len(), 7);
}

#[test]
fn test_render_shortest_path_and_flow() {
    let graph = network();
    let engine = Engine::new();
    let display = DisplayConfig::default();

    let result = engine.run("dijkstra", &graph, Some(1), Some(4)).unwrap();
    let json = render_result(Algorithm::Dijkstra, &result, Some(1), Some(4), &display);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["path"], serde_json::json!([1, 2, 3, 4]));
    assert_eq!(json["distance"].as_f64(), Some(4.0));

    let result = engine.run("ford_fulkerson", &graph, Some(5), Some(7)).unwrap();
    let json = render_result(Algorithm::MaxFlow, &result, Some(5), Some(7), &display);
    assert_eq!(json["max_flow"].as_f64(), Some(3.0));
    assert_eq!(json["flows"]["6"]["7"].as_f64(), Some(2.0));
    assert_eq!(json["flows"]["5"]["7"].as_f64(), Some(1.0));

    let result = engine.run("kruskal", &graph, None, None).unwrap();
    let json = render_result(Algorithm::Kruskal, &result, None, None, &display);
    assert_eq!(json["mst"].as_array().unwrap().len(), 5);
    assert_eq!(json["components"], 2);
}

#[test]
fn test_render_all_pairs_pair_or_window() {
    let graph = line(15);
    let engine = Engine::new();
    let display = DisplayConfig::default();

    let result = engine.run("floyd_warshall", &graph, Some(2), Some(5)).unwrap();
    let json = render_result(Algorithm::FloydWarshall, &result, Some(2), Some(5), &display);
    assert_eq!(json["path"], serde_json::json!([2, 3, 4, 5]));
    assert_eq!(json["distance"].as_f64(), Some(3.0));
    assert_eq!(json["total_nodes"], 15);

    let result = engine.run("floyd_warshall", &graph, None, None).unwrap();
    let json = render_result(Algorithm::FloydWarshall, &result, None, None, &display);
    let rows = json["distances_sample"].as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["cells"].as_array().unwrap().len(), 10);
    assert!(json["note"].as_str().unwrap().contains("15"));
    assert_eq!(json["total_nodes"], 15);
    assert!(json.get("path").is_none());
}

#[test]
fn test_render_single_source_target_or_sample() {
    let graph = line(15);
    let engine = Engine::new();
    let display = DisplayConfig::default();

    let result = engine.run("bellman_ford", &graph, Some(1), Some(6)).unwrap();
    let json = render_result(Algorithm::BellmanFord, &result, Some(1), Some(6), &display);
    assert_eq!(json["distance"].as_f64(), Some(5.0));
    assert_eq!(json["reachable_nodes"], 15);

    // Target 1 is not reachable from 6: fall back to a sample.
    let result = engine.run("bellman_ford", &graph, Some(6), Some(1)).unwrap();
    let json = render_result(Algorithm::BellmanFord, &result, Some(6), Some(1), &display);
    assert!(json.get("path").is_none());
    assert_eq!(json["distances_sample"].as_array().unwrap().len(), 10);
    assert_eq!(json["reachable_nodes"], 10);
}

#[test]
fn test_render_error_shape() {
    let err = GraphError::NoPathExists {
        source_id: 4,
        target_id: 1,
    };
    let json = render_error(&err);
    assert_eq!(json["error"]["kind"], "no_path_exists");
    assert!(json["error"]["message"].as_str().unwrap().contains("4"));
}

// ==================== CLI Helpers ====================

fn ngraph_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ngraph"))
}

fn run_ngraph(args: &[&str]) -> Output {
    Command::new(ngraph_bin())
        .args(args)
        .output()
        .expect("Failed to run ngraph")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "ngraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_info() {
    let file = network_file();
    let path = file.path().to_str().unwrap();

    let output = run_ngraph(&["info", path]);
    assert_success(&output);
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Nodes: 7"));
    assert!(text.contains("Edges: 7"));

    let output = run_ngraph(&["--format", "json", "info", path]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["nodes"], 7);
    assert_eq!(json["positioned_nodes"], 4);
    assert_eq!(json["components"], 2);
}

#[test]
fn test_cli_run_json() {
    let file = network_file();
    let path = file.path().to_str().unwrap();

    let output = run_ngraph(&[
        "--format", "json", "run", path, "dijkstra", "--source", "1", "--target", "4",
    ]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dijkstra");
    assert_eq!(json["path"], serde_json::json!([1, 2, 3, 4]));

    let output = run_ngraph(&["--format", "json", "run", path, "prim"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["total_weight"].as_f64(), Some(6.0));
}

#[test]
fn test_cli_run_text() {
    let file = network_file();
    let path = file.path().to_str().unwrap();

    let output = run_ngraph(&["run", path, "max-flow", "--source", "5", "--target", "7"]);
    assert_success(&output);
    let text = String::from_utf8_lossy(&output.stdout);
    assert!(text.contains("Algorithm: ford_fulkerson"));
    assert!(text.contains("Max flow: 3"));
}

#[test]
fn test_cli_errors_and_exit_codes() {
    let file = network_file();
    let path = file.path().to_str().unwrap();

    let output = run_ngraph(&["--format", "json", "run", path, "a_star"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout_json(&output)["error"]["kind"], "unsupported_algorithm");

    let output = run_ngraph(&["run", path, "dijkstra", "--source", "4", "--target", "1"]);
    assert_eq!(output.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No path exists"));

    let output = run_ngraph(&["run", path, "dijkstra", "--source", "1"]);
    assert_eq!(output.status.code(), Some(4));

    let output = run_ngraph(&["info", "/nonexistent/network.json"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_cli_view_and_algorithms() {
    let file = network_file();
    let path = file.path().to_str().unwrap();

    let output = run_ngraph(&["--format", "json", "view", path, "--max-nodes", "3"]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["truncated"], true);
    assert_eq!(json["nodes"].as_array().unwrap().len(), 3);
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);

    let output = run_ngraph(&["--format", "json", "algorithms"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["algorithms"].as_array().unwrap().len(), 6);
}

#[test]
fn test_cli_custom_config() {
    let file = network_file();
    let path = file.path().to_str().unwrap();
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[display]\nmatrix_rows = 2\nmatrix_cols = 2").unwrap();

    let output = run_ngraph(&[
        "--format",
        "json",
        "--config",
        config.path().to_str().unwrap(),
        "run",
        path,
        "floyd_warshall",
    ]);
    assert_success(&output);
    let rows = stdout_json(&output)["distances_sample"].as_array().unwrap().len();
    assert_eq!(rows, 2);
}
