use std::io::Read;

use serde::Deserialize;
use tracing::info;

use crate::{error::GraphError, graph::Graph, positions::Positions};

impl Graph {
    /// Complete directed graph from a square distance table.
    ///
    /// Entry `[i][j]` becomes the edge `i -> j`. The diagonal is ignored, so the graph
    /// has no self-loops. Negative, non-finite and oversized entries are rejected.
    pub fn from_distance_matrix(distances: &[Vec<f64>]) -> Result<Graph, GraphError> {
        let node_count = distances.len();
        if node_count == 0 {
            return Err(GraphError::InvalidNodeCount(node_count.to_string()));
        }

        let mut graph = Graph::with_nodes(node_count);

        for (source, row) in distances.iter().enumerate() {
            if row.len() != node_count {
                return Err(GraphError::MalformedDistanceTable {
                    row: source,
                    len: row.len(),
                    expected: node_count,
                });
            }

            for (target, &distance) in row.iter().enumerate() {
                if source == target {
                    continue;
                }

                graph.add_edge(source, target, distance)?;
            }
        }

        Ok(graph)
    }
}

/// Distance table read from JSON, optionally with node coordinates.
///
/// ```json
/// { "distances": [[0, 3], [4, 0]], "positions": [{ "lat": 51.5, "lng": -0.1 }, ...] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct MatrixInput {
    pub distances: Vec<Vec<f64>>,
    #[serde(default)]
    pub positions: Option<Positions>,
}

impl MatrixInput {
    pub fn from_reader<R: Read>(reader: R) -> Result<MatrixInput, GraphError> {
        serde_json::from_reader(reader).map_err(|err| GraphError::InvalidInput(err.to_string()))
    }

    pub fn into_graph_and_positions(self) -> Result<(Graph, Option<Positions>), GraphError> {
        let graph = Graph::from_distance_matrix(&self.distances)?;

        if let Some(positions) = &self.positions {
            positions.ensure_covers(&graph)?;
        }

        info!(
            "Loaded distance table with {} nodes{}",
            graph.node_count(),
            if self.positions.is_some() {
                " and positions"
            } else {
                ""
            }
        );

        Ok((graph, self.positions))
    }
}
