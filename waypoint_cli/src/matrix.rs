use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use tracing::warn;
use waypoint_core::{
    HeuristicKind, RoutingAlgorithm, compare_algorithms, matrix_input::MatrixInput, run_algorithm,
};

use crate::{compare::comparison_table, graph_args::SearchArgs, route::describe_report};

#[derive(Args)]
pub struct MatrixArgs {
    /// JSON document with a `distances` table and optional `positions`
    #[arg(short = 'i', long)]
    input: PathBuf,

    #[command(flatten)]
    search: SearchArgs,

    /// Runs every algorithm when omitted
    #[arg(short, long)]
    algorithm: Option<RoutingAlgorithm>,
}

pub fn run(args: MatrixArgs) -> Result<(), anyhow::Error> {
    let file = File::open(&args.input)?;
    let input = MatrixInput::from_reader(BufReader::new(file))?;
    let (graph, positions) = input.into_graph_and_positions()?;

    let mut params = args.search.params();
    if positions.is_none() && params.heuristic.needs_positions() {
        warn!(
            "{} has no positions, A* falls back to the {} heuristic",
            args.input.display(),
            HeuristicKind::Zero
        );
        params.heuristic = HeuristicKind::Zero;
    }

    let start = args.search.start.unwrap_or(0);
    let end = args
        .search
        .end
        .unwrap_or(graph.node_count().saturating_sub(1));

    match args.algorithm {
        Some(algorithm) => {
            let report = run_algorithm(algorithm, &graph, positions.as_ref(), start, end, &params)?;
            if args.search.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", describe_report(&report));
            }
        }
        None => {
            let outcomes = compare_algorithms(&graph, positions.as_ref(), start, end, &params)?;
            if args.search.json {
                println!("{}", serde_json::to_string_pretty(&outcomes)?);
            } else {
                println!("{}", comparison_table(&outcomes));
            }
        }
    }

    Ok(())
}
