use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::{error::GraphError, graph::Graph, types::NodeId};

use super::path::SearchResult;

/// Counters collected during a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes taken off the frontier (queue, stack or recursion).
    pub iterations: usize,
    /// Edges examined while expanding those nodes.
    pub nodes_visited: usize,
    /// Wall-clock time of the search.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}

pub trait ShortestPathAlgorithm {
    /// Searches a route from `start` to `end`.
    ///
    /// `Err` is reserved for invalid arguments, an unreachable `end` is
    /// `Ok(SearchResult::NotFound)`.
    fn calc_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchResult, GraphError>;

    fn stats(&self) -> SearchStats;
}

pub(crate) fn validate_endpoints(
    graph: &Graph,
    start: NodeId,
    end: NodeId,
) -> Result<(), GraphError> {
    graph.ensure_node(start)?;
    graph.ensure_node(end)
}
