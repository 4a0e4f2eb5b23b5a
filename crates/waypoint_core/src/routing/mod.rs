pub mod astar;
pub mod astar_heuristic;
pub mod bfs;
pub mod brute_force_tour;
pub mod dfs;
pub mod dijkstra;
pub mod path;
pub mod reconstruct_path;
pub mod routing_request;
pub mod shortest_path_algorithm;
pub mod total_distance;

use crate::{error::GraphError, graph::Graph, positions::Positions, types::NodeId};

use self::{
    astar::AStar, bfs::Bfs, brute_force_tour::BruteForceTour, dfs::Dfs, dijkstra::Dijkstra,
    path::SearchResult, shortest_path_algorithm::ShortestPathAlgorithm,
};

pub fn dijkstra(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchResult, GraphError> {
    Dijkstra::new().calc_path(graph, start, end)
}

/// A* guided by the straight-line distance between `positions`, which must cover every
/// node of `graph`.
pub fn a_star(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
    positions: &Positions,
) -> Result<SearchResult, GraphError> {
    positions.ensure_covers(graph)?;
    AStar::new(positions).calc_path(graph, start, end)
}

pub fn bfs(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchResult, GraphError> {
    Bfs::new().calc_path(graph, start, end)
}

pub fn dfs(graph: &Graph, start: NodeId, end: NodeId) -> Result<SearchResult, GraphError> {
    Dfs::new().calc_path(graph, start, end)
}

pub fn brute_force_tour(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
) -> Result<SearchResult, GraphError> {
    BruteForceTour::default().calc_path(graph, start, end)
}
