//! CLI entry point for the `ngraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use netgraph::cli::commands;
use netgraph::view::render_error;
use netgraph::{EngineConfig, ErrorKind};

#[derive(Parser)]
#[command(
    name = "ngraph",
    about = "netgraph CLI: shortest paths, spanning trees and flows over network datasets"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a dataset
    Info {
        /// Path to the JSON dataset
        file: PathBuf,
    },
    /// Run an algorithm over a dataset
    Run {
        /// Path to the JSON dataset
        file: PathBuf,
        /// dijkstra, prim, kruskal, ford_fulkerson, floyd_warshall, bellman_ford
        algorithm: String,
        /// Source node ID
        #[arg(long)]
        source: Option<u64>,
        /// Target node ID
        #[arg(long)]
        target: Option<u64>,
    },
    /// Print a display-sized sample of the graph
    View {
        /// Path to the JSON dataset
        file: PathBuf,
        /// Maximum nodes to include
        #[arg(long)]
        max_nodes: Option<usize>,
    },
    /// List the supported algorithms
    Algorithms,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = match &cli.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        None => EngineConfig::load_or_default(),
    };

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Run {
            file,
            algorithm,
            source,
            target,
        } => commands::cmd_run(&file, &algorithm, source, target, &config, json),
        Commands::View { file, max_nodes } => commands::cmd_view(
            &file,
            max_nodes.unwrap_or(config.display.max_visual_nodes),
            json,
        ),
        Commands::Algorithms => commands::cmd_algorithms(json),
    };

    if let Err(e) = result {
        if json {
            println!("{}", render_error(&e));
        } else {
            eprintln!("Error: {}", e);
        }
        let code = match e.kind() {
            ErrorKind::Io => 1,
            ErrorKind::Parse => 2,
            ErrorKind::UnsupportedAlgorithm => 3,
            ErrorKind::InvalidGraph | ErrorKind::InvalidEndpoints => 4,
            ErrorKind::NoPathExists | ErrorKind::NegativeCycleDetected => 5,
        };
        process::exit(code);
    }
}
