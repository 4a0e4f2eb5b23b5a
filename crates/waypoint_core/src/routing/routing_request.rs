use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    distance::Distance, error::GraphError, graph::Graph, positions::Positions, types::NodeId,
};

use super::{
    astar::AStar,
    astar_heuristic::{AStarHeuristic, HaversineHeuristic, StraightLineHeuristic, ZeroHeuristic},
    bfs::Bfs,
    brute_force_tour::{BruteForceTour, DEFAULT_MAX_TOUR_NODES},
    dfs::Dfs,
    dijkstra::Dijkstra,
    path::SearchResult,
    shortest_path_algorithm::{SearchStats, ShortestPathAlgorithm},
    total_distance::total_distance,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingAlgorithm {
    Dijkstra,
    AStar,
    Bfs,
    Dfs,
    BruteForceTour,
}

impl RoutingAlgorithm {
    pub const ALL: [RoutingAlgorithm; 5] = [
        RoutingAlgorithm::Dijkstra,
        RoutingAlgorithm::AStar,
        RoutingAlgorithm::Bfs,
        RoutingAlgorithm::Dfs,
        RoutingAlgorithm::BruteForceTour,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RoutingAlgorithm::Dijkstra => "dijkstra",
            RoutingAlgorithm::AStar => "a-star",
            RoutingAlgorithm::Bfs => "bfs",
            RoutingAlgorithm::Dfs => "dfs",
            RoutingAlgorithm::BruteForceTour => "brute-force-tour",
        }
    }
}

impl fmt::Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoutingAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "astar" | "a*" => Ok(RoutingAlgorithm::AStar),
            "tour" | "tsp" => Ok(RoutingAlgorithm::BruteForceTour),
            name => RoutingAlgorithm::ALL
                .into_iter()
                .find(|algorithm| algorithm.name() == name)
                .ok_or_else(|| GraphError::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    Zero,
    #[default]
    StraightLine,
    Haversine,
}

impl HeuristicKind {
    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Zero => "zero",
            HeuristicKind::StraightLine => "straight-line",
            HeuristicKind::Haversine => "haversine",
        }
    }

    pub fn needs_positions(&self) -> bool {
        !matches!(self, HeuristicKind::Zero)
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zero" | "none" => Ok(HeuristicKind::Zero),
            "straight-line" | "euclidean" => Ok(HeuristicKind::StraightLine),
            "haversine" => Ok(HeuristicKind::Haversine),
            _ => Err(GraphError::UnknownHeuristic(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub heuristic: HeuristicKind,
    pub max_tour_nodes: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            heuristic: HeuristicKind::default(),
            max_tour_nodes: DEFAULT_MAX_TOUR_NODES,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: RoutingAlgorithm,
    pub result: SearchResult,
    pub distance: Option<Distance>,
    pub stats: SearchStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComparisonOutcome {
    Completed(AlgorithmReport),
    Skipped {
        algorithm: RoutingAlgorithm,
        reason: String,
    },
}

impl ComparisonOutcome {
    pub fn algorithm(&self) -> RoutingAlgorithm {
        match self {
            ComparisonOutcome::Completed(report) => report.algorithm,
            ComparisonOutcome::Skipped { algorithm, .. } => *algorithm,
        }
    }
}

pub fn create_heuristic<'a>(
    kind: HeuristicKind,
    graph: &Graph,
    positions: Option<&'a Positions>,
) -> Result<Box<dyn AStarHeuristic + 'a>, GraphError> {
    if !kind.needs_positions() {
        return Ok(Box::new(ZeroHeuristic));
    }

    // Without coordinates there is nothing to estimate from
    let first_node = graph.nodes().first().copied().unwrap_or_default();
    let positions = positions.ok_or(GraphError::MissingPosition(first_node))?;
    positions.ensure_covers(graph)?;

    Ok(match kind {
        HeuristicKind::Haversine => Box::new(HaversineHeuristic::new(positions)),
        _ => Box::new(StraightLineHeuristic::new(positions)),
    })
}

pub fn create_algorithm<'a>(
    algorithm: RoutingAlgorithm,
    graph: &Graph,
    positions: Option<&'a Positions>,
    params: &SearchParams,
) -> Result<Box<dyn ShortestPathAlgorithm + 'a>, GraphError> {
    Ok(match algorithm {
        RoutingAlgorithm::Dijkstra => Box::new(Dijkstra::new()),
        RoutingAlgorithm::AStar => Box::new(AStar::with_heuristic(create_heuristic(
            params.heuristic,
            graph,
            positions,
        )?)),
        RoutingAlgorithm::Bfs => Box::new(Bfs::new()),
        RoutingAlgorithm::Dfs => Box::new(Dfs::new()),
        RoutingAlgorithm::BruteForceTour => Box::new(BruteForceTour::new(params.max_tour_nodes)),
    })
}

/// Runs one algorithm and measures it.
pub fn run_algorithm(
    algorithm: RoutingAlgorithm,
    graph: &Graph,
    positions: Option<&Positions>,
    start: NodeId,
    end: NodeId,
    params: &SearchParams,
) -> Result<AlgorithmReport, GraphError> {
    let mut search = create_algorithm(algorithm, graph, positions, params)?;

    let result = search.calc_path(graph, start, end)?;
    let stats = search.stats();

    let distance = result
        .path()
        .map(|path| total_distance(graph, path))
        .transpose()?;

    debug!("{} finished in {:?}: {:?}", algorithm, stats.elapsed, result);

    Ok(AlgorithmReport {
        algorithm,
        result,
        distance,
        stats,
    })
}

/// Runs every algorithm on the same input. An algorithm rejecting the input (e.g. a
/// tour over too many nodes) is reported as skipped instead of failing the comparison.
pub fn compare_algorithms(
    graph: &Graph,
    positions: Option<&Positions>,
    start: NodeId,
    end: NodeId,
    params: &SearchParams,
) -> Result<Vec<ComparisonOutcome>, GraphError> {
    graph.ensure_node(start)?;
    graph.ensure_node(end)?;

    Ok(RoutingAlgorithm::ALL
        .into_iter()
        .map(
            |algorithm| match run_algorithm(algorithm, graph, positions, start, end, params) {
                Ok(report) => ComparisonOutcome::Completed(report),
                Err(error) => ComparisonOutcome::Skipped {
                    algorithm,
                    reason: error.to_string(),
                },
            },
        )
        .collect())
}
