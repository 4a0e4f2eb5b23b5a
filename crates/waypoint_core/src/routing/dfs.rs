use fxhash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::{error::GraphError, graph::Graph, stopwatch::Stopwatch, types::NodeId};

use super::{
    path::SearchResult,
    reconstruct_path::reconstruct_path_from_map,
    shortest_path_algorithm::{SearchStats, ShortestPathAlgorithm, validate_endpoints},
};

/// Depth-first search with an explicit stack.
///
/// Neighbors are explored in adjacency order. The returned path is the first one the
/// traversal reaches, neither the shortest nor the one with fewest edges.
#[derive(Default)]
pub struct Dfs {
    stats: SearchStats,
}

impl Dfs {
    pub fn new() -> Self {
        Dfs::default()
    }
}

impl ShortestPathAlgorithm for Dfs {
    fn calc_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchResult, GraphError> {
        let stopwatch = Stopwatch::start("dfs");
        validate_endpoints(graph, start, end)?;

        self.stats = SearchStats::default();

        let mut stack = vec![start];
        let mut visited = FxHashSet::default();
        let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();

        let mut found = false;

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }

            self.stats.iterations += 1;

            if node == end {
                found = true;
                break;
            }

            // Reversed so that the first neighbor ends on top of the stack
            for edge in graph.node_edges(node).iter().rev() {
                self.stats.nodes_visited += 1;

                let next = edge.target();
                if !visited.contains(&next) {
                    // The latest push is popped first, so it owns the predecessor
                    predecessors.insert(next, node);
                    stack.push(next);
                }
            }
        }

        debug!(
            "dfs iterations: {}, nodes visited: {}",
            self.stats.iterations, self.stats.nodes_visited
        );
        self.stats.elapsed = stopwatch.finish();

        if !found {
            return Ok(SearchResult::NotFound);
        }

        reconstruct_path_from_map(start, end, &predecessors).map(SearchResult::Found)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}
