//! CLI command implementations.

use std::path::Path;

use crate::config::{DisplayConfig, EngineConfig};
use crate::engine::{Algorithm, AlgorithmResult, Engine};
use crate::format::DatasetReader;
use crate::graph::connected_components;
use crate::types::GraphResult;
use crate::view::{render_result, sample_graph, sample_reachable, window_matrix};

/// Display information about a dataset.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let file_size = std::fs::metadata(path)?.len();
    let components = connected_components(&graph).len();
    let positioned = graph
        .nodes()
        .iter()
        .filter(|n| n.position.is_some())
        .count();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "file_size": file_size,
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "positioned_nodes": positioned,
            "negative_edges": graph.negative_edge_count(),
            "self_loops": graph.self_loop_count(),
            "components": components,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("File size: {}", format_size(file_size));
        println!("Nodes: {}", graph.node_count());
        println!("  With coordinates: {}", positioned);
        println!("Edges: {}", graph.edge_count());
        println!("  Negative weight: {}", graph.negative_edge_count());
        println!("  Self-loops: {}", graph.self_loop_count());
        println!("Weakly connected components: {}", components);
    }
    Ok(())
}

/// Run one algorithm over a dataset and print its report.
pub fn cmd_run(
    path: &Path,
    algorithm: &str,
    source: Option<u64>,
    target: Option<u64>,
    config: &EngineConfig,
    json: bool,
) -> GraphResult<()> {
    let algorithm = Algorithm::parse(algorithm)?;
    let graph = DatasetReader::read_from_file(path)?;
    let engine = Engine::with_config(config);
    let result = engine.execute(algorithm, &graph, source, target)?;

    if json {
        let report = render_result(algorithm, &result, source, target, &config.display);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_default()
        );
    } else {
        print_result(algorithm, &result, source, target, &config.display);
    }
    Ok(())
}

/// Print a display-sized sample of the graph.
pub fn cmd_view(path: &Path, max_nodes: usize, json: bool) -> GraphResult<()> {
    let graph = DatasetReader::read_from_file(path)?;
    let sample = sample_graph(&graph, max_nodes);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&sample).unwrap_or_default()
        );
    } else {
        if sample.truncated {
            println!(
                "Showing {} of {} nodes, {} of {} edges",
                sample.nodes.len(),
                sample.total_nodes,
                sample.edges.len(),
                sample.total_edges
            );
        }
        for node in &sample.nodes {
            match node.position {
                Some((x, y)) => println!("Node {} {:?} at ({}, {})", node.id, node.label, x, y),
                None => println!("Node {} {:?}", node.id, node.label),
            }
        }
        for edge in &sample.edges {
            println!(
                "  {} -> {} (weight {}, capacity {})",
                edge.from, edge.to, edge.weight, edge.capacity
            );
        }
    }
    Ok(())
}

/// List the supported algorithms.
pub fn cmd_algorithms(json: bool) -> GraphResult<()> {
    if json {
        let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
        println!("{}", serde_json::json!({ "algorithms": names }));
    } else {
        for algorithm in Algorithm::ALL {
            println!(
                "{:<16} source: {:<9} target: {}",
                algorithm.name(),
                format!("{:?}", algorithm.source()).to_lowercase(),
                format!("{:?}", algorithm.target()).to_lowercase()
            );
        }
    }
    Ok(())
}

fn print_result(
    algorithm: Algorithm,
    result: &AlgorithmResult,
    source: Option<u64>,
    target: Option<u64>,
    display: &DisplayConfig,
) {
    println!("Algorithm: {}", algorithm.name());
    match result {
        AlgorithmResult::ShortestPath(path) => {
            println!("Path: {}", format_path(&path.path));
            println!("Distance: {}", path.distance);
        }
        AlgorithmResult::SpanningTree(tree) => {
            println!("Edges: {}", tree.edges.len());
            for edge in &tree.edges {
                println!("  {} -- {} ({})", edge.from, edge.to, edge.weight);
            }
            println!("Total weight: {}", tree.total_weight);
            println!("Components: {}", tree.components);
        }
        AlgorithmResult::MaxFlow(flow) => {
            println!("Max flow: {}", flow.value);
            for (from, row) in &flow.flows {
                for (to, amount) in row {
                    if *amount > 0.0 {
                        println!("  {} -> {}: {}", from, to, amount);
                    }
                }
            }
            println!("Min cut (source side): {:?}", flow.min_cut);
        }
        AlgorithmResult::AllPairs(matrix) => {
            match source.zip(target).and_then(|(s, t)| matrix.path(s, t)) {
                Some(path) => {
                    println!("Path: {}", format_path(&path.path));
                    println!("Distance: {}", path.distance);
                }
                None => {
                    for row in window_matrix(matrix, display.matrix_rows, display.matrix_cols) {
                        let cells: Vec<String> = row
                            .cells
                            .iter()
                            .map(|c| match c.distance {
                                Some(d) => format!("{}:{}", c.target, d),
                                None => format!("{}:-", c.target),
                            })
                            .collect();
                        println!("  {:>6} | {}", row.source, cells.join("  "));
                    }
                }
            }
            println!("Total nodes: {}", matrix.len());
        }
        AlgorithmResult::SingleSource(single) => {
            match target.and_then(|t| single.path_to(t)) {
                Some(path) => {
                    println!("Path: {}", format_path(&path.path));
                    println!("Distance: {}", path.distance);
                }
                None => {
                    for sample in sample_reachable(single, display.reachable_sample) {
                        println!("  {}: {}", sample.node, sample.distance);
                    }
                }
            }
            println!("Reachable nodes: {}", single.reachable_count());
        }
    }
}

fn format_path(path: &[u64]) -> String {
    path.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
