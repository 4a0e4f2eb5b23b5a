use clap::Args;
use serde_json::json;

use crate::graph_args::GraphArgs;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    graph: GraphArgs,

    /// Print JSON instead of the node listing
    #[arg(long)]
    json: bool,
}

pub fn run(args: GenerateArgs) -> Result<(), anyhow::Error> {
    let (graph, positions) = args.graph.build()?;

    if args.json {
        let document = json!({ "graph": graph, "positions": positions });
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    print!("{}", graph);
    for (node, point) in positions.iter() {
        println!("Node {} is at ({:.6}, {:.6})", node, point.lat, point.lng);
    }

    Ok(())
}
