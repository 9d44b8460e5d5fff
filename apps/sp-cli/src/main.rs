use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use sp_core::timing::{self, query_timing};
use sp_graph::Graph;
use sp_project::{GraphFile, ProjectError, load_graph_file, sample_graph_file};
use sp_solver::{EngineOptions, FrontierKind, PathResult, QueryStats, Route, ShortestPathEngine};

#[derive(Parser)]
#[command(name = "sp-cli")]
#[command(about = "Shortest-path queries over weighted graph files", long_about = None)]
struct Cli {
    /// Log engine activity (debug level) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest path between two nodes
    Find {
        /// Path to the graph file (.yaml, .yml or .json)
        graph_path: PathBuf,
        /// Start node
        start: String,
        /// End node
        end: String,
        /// Frontier strategy (overrides the graph file)
        #[arg(long)]
        frontier: Option<FrontierKind>,
        /// Print query counters and timing
        #[arg(long)]
        stats: bool,
    },
    /// List the distance from a node to every node it can reach
    Distances {
        /// Path to the graph file (.yaml, .yml or .json)
        graph_path: PathBuf,
        /// Source node
        start: String,
    },
    /// Validate a graph file
    Validate {
        /// Path to the graph file (.yaml, .yml or .json)
        graph_path: PathBuf,
    },
    /// Run a query on the built-in five-node sample graph
    Demo {
        #[arg(default_value = "1")]
        start: String,
        #[arg(default_value = "4")]
        end: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Failed to load {path}: {source}")]
    Load { path: PathBuf, source: ProjectError },

    #[error("Invalid graph: {0}")]
    Graph(#[from] ProjectError),

    #[error("{0}")]
    Query(#[from] sp_solver::PathError),
}

type CliResult<T> = Result<T, CliError>;

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            graph_path,
            start,
            end,
            frontier,
            stats,
        } => cmd_find(&graph_path, &start, &end, frontier, stats),
        Commands::Distances { graph_path, start } => cmd_distances(&graph_path, &start),
        Commands::Validate { graph_path } => cmd_validate(&graph_path),
        Commands::Demo { start, end } => cmd_demo(&start, &end),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(graph_path: &Path) -> CliResult<(GraphFile, Graph<String>)> {
    let file = load_graph_file(graph_path).map_err(|source| CliError::Load {
        path: graph_path.to_path_buf(),
        source,
    })?;
    let graph = file.to_graph()?;
    Ok((file, graph))
}

fn cmd_find(
    graph_path: &Path,
    start: &str,
    end: &str,
    frontier: Option<FrontierKind>,
    stats: bool,
) -> CliResult<()> {
    let (file, graph) = load(graph_path)?;
    let mut options = file.engine_options();
    if let Some(frontier) = frontier {
        options.frontier = frontier;
    }
    if stats {
        timing::enable_timing();
    }
    tracing::debug!(frontier = %options.frontier, "engine configured");

    let engine = ShortestPathEngine::with_options(&graph, options);
    let (result, query_stats) = engine.find_with_stats(&start.to_string(), &end.to_string());
    println!("{}", render_result(&result));

    if stats {
        println!("{}", render_stats(&options, &query_stats));
        if let Some(summary) = query_timing::summary() {
            print!("{summary}");
        }
    }
    Ok(())
}

fn cmd_distances(graph_path: &Path, start: &str) -> CliResult<()> {
    let (file, graph) = load(graph_path)?;
    let engine = ShortestPathEngine::with_options(&graph, file.engine_options());
    let distances = engine.distances_from(&start.to_string())?;

    println!("Distances from {start}:");
    for (node, dist) in &distances {
        println!("  {node:<16} {dist}");
    }
    let unreachable = graph.node_count() - distances.len();
    if unreachable > 0 {
        println!("  ({unreachable} node(s) unreachable)");
    }
    Ok(())
}

fn cmd_validate(graph_path: &Path) -> CliResult<()> {
    println!("Validating graph: {}", graph_path.display());
    let (file, graph) = load(graph_path)?;
    println!("✓ Graph '{}' is valid", file.name);
    println!(
        "  {} nodes, {} directed edges, frontier={}",
        graph.node_count(),
        graph.edge_count(),
        file.engine_options().frontier
    );
    Ok(())
}

fn cmd_demo(start: &str, end: &str) -> CliResult<()> {
    let graph = sample_graph_file().to_graph()?;
    let engine = ShortestPathEngine::new(&graph);
    let result = engine.find(&start.to_string(), &end.to_string());
    println!("{}", render_result(&result));
    Ok(())
}

fn render_result(result: &PathResult<Route<String>>) -> String {
    match result {
        Ok(route) => format!("Shortest Path : {route}\nTotal weight  : {}", route.weight()),
        Err(err) => format!("No Path Found ({err})"),
    }
}

fn render_stats(options: &EngineOptions, stats: &QueryStats) -> String {
    format!(
        "frontier={} outcome={:?} settled={} relaxations={} skipped_edges={}",
        options.frontier, stats.outcome, stats.settled, stats.relaxations, stats.skipped_edges
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sp_solver::{PathError, QueryOutcome};

    #[test]
    fn cli_parses_find_with_frontier() {
        let cli = Cli::parse_from([
            "sp-cli", "find", "g.yaml", "a", "b", "--frontier", "heap", "--stats",
        ]);
        match cli.command {
            Commands::Find {
                frontier, stats, ..
            } => {
                assert_eq!(frontier, Some(FrontierKind::Heap));
                assert!(stats);
            }
            _ => panic!("expected find"),
        }
    }

    #[test]
    fn demo_defaults_to_one_to_four() {
        let cli = Cli::parse_from(["sp-cli", "demo"]);
        match cli.command {
            Commands::Demo { start, end } => assert_eq!((start.as_str(), end.as_str()), ("1", "4")),
            _ => panic!("expected demo"),
        }
    }

    #[test]
    fn renders_sample_route() {
        let graph = sample_graph_file().to_graph().unwrap();
        let engine = ShortestPathEngine::new(&graph);
        let result = engine.find(&"1".to_string(), &"4".to_string());
        assert_eq!(
            render_result(&result),
            "Shortest Path : 1 2 4\nTotal weight  : 15"
        );
    }

    #[test]
    fn renders_missing_route() {
        let result: PathResult<Route<String>> = Err(PathError::NoRoute);
        assert_eq!(
            render_result(&result),
            "No Path Found (no route connects start to end)"
        );
    }

    #[test]
    fn renders_stats_line() {
        let stats = QueryStats {
            settled: 3,
            relaxations: 4,
            skipped_edges: 0,
            outcome: QueryOutcome::TargetReached,
        };
        assert_eq!(
            render_stats(&EngineOptions::default(), &stats),
            "frontier=linear outcome=TargetReached settled=3 relaxations=4 skipped_edges=0"
        );
    }
}
