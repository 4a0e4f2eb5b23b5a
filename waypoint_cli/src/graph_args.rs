use clap::Args;
use rand::{SeedableRng, rngs::SmallRng};
use tracing::info;
use waypoint_core::{
    Graph, HeuristicKind, NodeId, Positions, SearchParams,
    generator::{build_random_graph, random_positions},
    routing::brute_force_tour::DEFAULT_MAX_TOUR_NODES,
};

use crate::parsers;

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Number of nodes of the random graph
    #[arg(short, long, env = "WAYPOINT_NODES", default_value = "10", value_parser = parsers::parse_node_count)]
    pub nodes: usize,

    /// Seed of the random generator, drawn at random when omitted
    #[arg(short, long, env = "WAYPOINT_SEED")]
    pub seed: Option<u64>,
}

impl GraphArgs {
    pub fn build(&self) -> anyhow::Result<(Graph, Positions)> {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!("Generating {} nodes with seed {}", self.nodes, seed);

        let mut rng = SmallRng::seed_from_u64(seed);
        let graph = build_random_graph(self.nodes, &mut rng)?;
        let positions = random_positions(self.nodes, &mut rng)?;

        Ok((graph, positions))
    }

    /// The requested endpoints, defaulting to the first and the last node.
    pub fn endpoints(&self, start: Option<NodeId>, end: Option<NodeId>) -> (NodeId, NodeId) {
        (
            start.unwrap_or(0),
            end.unwrap_or(self.nodes.saturating_sub(1)),
        )
    }
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Start node, the first node when omitted
    #[arg(long)]
    pub start: Option<NodeId>,

    /// End node, the last node when omitted
    #[arg(long)]
    pub end: Option<NodeId>,

    /// A* heuristic: zero, straight-line or haversine
    #[arg(long, default_value = "straight-line")]
    pub heuristic: HeuristicKind,

    /// Largest graph the brute force tour accepts
    #[arg(long, default_value_t = DEFAULT_MAX_TOUR_NODES)]
    pub max_tour_nodes: usize,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            heuristic: self.heuristic,
            max_tour_nodes: self.max_tour_nodes,
        }
    }
}
