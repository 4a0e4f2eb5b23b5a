pub mod distance;
pub mod error;
pub mod generator;
pub mod geopoint;
pub mod graph;
pub mod matrix_input;
pub mod positions;
pub mod priority_queue;
pub mod routing;
pub mod stopwatch;
pub mod types;

#[cfg(test)]
pub(crate) mod test_graph_utils;

pub use distance::Distance;
pub use error::GraphError;
pub use graph::{Edge, Graph};
pub use positions::{BoundingBox, Positions};
pub use routing::{
    path::{Path, SearchResult},
    routing_request::{
        AlgorithmReport, ComparisonOutcome, HeuristicKind, RoutingAlgorithm, SearchParams,
        compare_algorithms, run_algorithm,
    },
};
pub use types::NodeId;
