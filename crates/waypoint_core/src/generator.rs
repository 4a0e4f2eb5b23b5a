use rand::Rng;
use tracing::info;

use crate::{
    error::GraphError,
    geopoint::GeoPoint,
    graph::Graph,
    positions::{BoundingBox, Positions},
};

pub const MIN_EDGE_DISTANCE: i64 = 1;
pub const MAX_EDGE_DISTANCE: i64 = 100;

/// Parses a user supplied node count. Zero, negative and non-numeric input is rejected.
pub fn parse_node_count(input: &str) -> Result<usize, GraphError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(count) if count > 0 => Ok(count as usize),
        _ => Err(GraphError::InvalidNodeCount(trimmed.to_string())),
    }
}

fn validate_node_count(node_count: usize) -> Result<(), GraphError> {
    if node_count == 0 {
        return Err(GraphError::InvalidNodeCount(node_count.to_string()));
    }

    Ok(())
}

/// Random graph over nodes `0..node_count`.
///
/// Every node draws a number of edge attempts in `0..node_count`, each towards a random
/// target. Attempts hitting the node itself or an already connected target are dropped,
/// so there are no self-loops and at most one edge per pair. Distances are integers in
/// `1..=100`.
pub fn build_random_graph<R: Rng>(
    node_count: usize,
    rng: &mut R,
) -> Result<Graph, GraphError> {
    validate_node_count(node_count)?;

    let mut graph = Graph::with_nodes(node_count);

    for source in 0..node_count {
        let attempts = rng.random_range(0..node_count);
        for _ in 0..attempts {
            let target = rng.random_range(0..node_count);
            if target == source || graph.edge_between(source, target).is_some() {
                continue;
            }

            let distance = rng.random_range(MIN_EDGE_DISTANCE..=MAX_EDGE_DISTANCE);
            graph.add_edge(source, target, distance)?;
        }
    }

    info!(
        "Generated graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

pub fn random_positions<R: Rng>(
    node_count: usize,
    rng: &mut R,
) -> Result<Positions, GraphError> {
    random_positions_in(node_count, rng, &BoundingBox::default())
}

/// Uniform random positions inside `bbox`, unrelated to any edge distance.
pub fn random_positions_in<R: Rng>(
    node_count: usize,
    rng: &mut R,
    bbox: &BoundingBox,
) -> Result<Positions, GraphError> {
    validate_node_count(node_count)?;

    Ok((0..node_count)
        .map(|_| {
            let lat = rng.random::<f64>() * (bbox.max_lat - bbox.min_lat) + bbox.min_lat;
            let lng = rng.random::<f64>() * (bbox.max_lng - bbox.min_lng) + bbox.min_lng;
            GeoPoint::new(lat, lng)
        })
        .collect())
}
