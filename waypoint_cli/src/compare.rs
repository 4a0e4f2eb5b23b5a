use clap::Args;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use waypoint_core::{ComparisonOutcome, compare_algorithms};

use crate::{
    graph_args::{GraphArgs, SearchArgs},
    route::format_path,
};

#[derive(Args)]
pub struct CompareArgs {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(flatten)]
    search: SearchArgs,
}

pub fn run(args: CompareArgs) -> Result<(), anyhow::Error> {
    let (graph, positions) = args.graph.build()?;
    let (start, end) = args.graph.endpoints(args.search.start, args.search.end);

    let outcomes = compare_algorithms(
        &graph,
        Some(&positions),
        start,
        end,
        &args.search.params(),
    )?;

    if args.search.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        println!("Route from node {} to node {}", start, end);
        println!("{}", comparison_table(&outcomes));
    }

    Ok(())
}

pub fn comparison_table(outcomes: &[ComparisonOutcome]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Algorithm",
            "Path",
            "Distance (km)",
            "Iterations",
            "Nodes visited",
            "Time",
        ]);

    for outcome in outcomes {
        match outcome {
            ComparisonOutcome::Completed(report) => {
                let path = report
                    .result
                    .path()
                    .map_or_else(|| String::from("no route"), format_path);
                let distance = report
                    .distance
                    .map_or_else(|| String::from("-"), |distance| distance.to_string());

                table.add_row(vec![
                    report.algorithm.to_string(),
                    path,
                    distance,
                    report.stats.iterations.to_string(),
                    report.stats.nodes_visited.to_string(),
                    format!("{:?}", report.stats.elapsed),
                ]);
            }
            ComparisonOutcome::Skipped { algorithm, reason } => {
                table.add_row(vec![
                    algorithm.to_string(),
                    format!("skipped: {}", reason),
                    String::from("-"),
                    String::from("-"),
                    String::from("-"),
                    String::from("-"),
                ]);
            }
        }
    }

    table
}
