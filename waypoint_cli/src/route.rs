use clap::Args;
use tracing::info;
use waypoint_core::{AlgorithmReport, Path, RoutingAlgorithm, SearchResult, run_algorithm};

use crate::graph_args::{GraphArgs, SearchArgs};

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(flatten)]
    search: SearchArgs,

    /// dijkstra, a-star, bfs, dfs or brute-force-tour
    #[arg(short, long, default_value = "dijkstra")]
    algorithm: RoutingAlgorithm,
}

pub fn run(args: RouteArgs) -> Result<(), anyhow::Error> {
    let (graph, positions) = args.graph.build()?;
    let (start, end) = args.graph.endpoints(args.search.start, args.search.end);

    info!("Running {} from node {} to node {}", args.algorithm, start, end);

    let report = run_algorithm(
        args.algorithm,
        &graph,
        Some(&positions),
        start,
        end,
        &args.search.params(),
    )?;

    if args.search.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", describe_report(&report));
    }

    Ok(())
}

pub fn format_path(path: &Path) -> String {
    path.nodes()
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn describe_report(report: &AlgorithmReport) -> String {
    match (&report.result, report.distance) {
        (SearchResult::Found(path), Some(distance)) => format!(
            "{}: {} ({} km, {} iterations, {} nodes visited, {:?})",
            report.algorithm,
            format_path(path),
            distance,
            report.stats.iterations,
            report.stats.nodes_visited,
            report.stats.elapsed
        ),
        _ => format!(
            "{}: no route ({} iterations, {:?})",
            report.algorithm, report.stats.iterations, report.stats.elapsed
        ),
    }
}
