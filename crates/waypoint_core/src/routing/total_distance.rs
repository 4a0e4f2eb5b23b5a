use crate::{distance::Distance, error::GraphError, graph::Graph};

use super::path::Path;

/// Sum of the edge distances along `path`.
///
/// Each step uses the shortest direct edge between the two nodes. A step without a
/// direct edge means the path did not come from this graph and is reported as
/// [`GraphError::MissingEdge`].
pub fn total_distance(graph: &Graph, path: &Path) -> Result<Distance, GraphError> {
    path.steps()
        .map(|(from, to)| {
            graph
                .edge_between(from, to)
                .map(|edge| edge.distance())
                .ok_or(GraphError::MissingEdge { from, to })
        })
        .sum()
}
