use thiserror::Error;

use crate::types::NodeId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Node {0} is not registered in the graph")]
    UnknownNode(NodeId),
    #[error("Edge {source_node} -> {target} has a negative distance ({distance})")]
    NegativeDistance {
        source_node: NodeId,
        target: NodeId,
        distance: f64,
    },
    #[error("Edge {source_node} -> {target} has a non-finite distance")]
    NonFiniteDistance { source_node: NodeId, target: NodeId },
    #[error("Edge {source_node} -> {target} has a distance too large to represent ({distance})")]
    DistanceOutOfRange {
        source_node: NodeId,
        target: NodeId,
        distance: f64,
    },
    #[error("Invalid node count: {0}")]
    InvalidNodeCount(String),
    #[error("No edge between node {from} and node {to}")]
    MissingEdge { from: NodeId, to: NodeId },
    #[error("Predecessor chain from node {end} does not lead back to node {start}")]
    BrokenPredecessorChain { start: NodeId, end: NodeId },
    #[error("Distance table row {row} has {len} entries, expected {expected}")]
    MalformedDistanceTable {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("No position for node {0}")]
    MissingPosition(NodeId),
    #[error("Brute force tour supports at most {max} nodes, graph has {nodes}")]
    TourTooLarge { nodes: usize, max: usize },
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("Unknown heuristic: {0}")]
    UnknownHeuristic(String),
    #[error("Failed to read distance table: {0}")]
    InvalidInput(String),
}
