use std::collections::VecDeque;

use fxhash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::{error::GraphError, graph::Graph, stopwatch::Stopwatch, types::NodeId};

use super::{
    path::SearchResult,
    reconstruct_path::reconstruct_path_from_map,
    shortest_path_algorithm::{SearchStats, ShortestPathAlgorithm, validate_endpoints},
};

/// Breadth-first search: fewest edges, distances are ignored.
#[derive(Default)]
pub struct Bfs {
    stats: SearchStats,
}

impl Bfs {
    pub fn new() -> Self {
        Bfs::default()
    }
}

impl ShortestPathAlgorithm for Bfs {
    fn calc_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchResult, GraphError> {
        let stopwatch = Stopwatch::start("bfs");
        validate_endpoints(graph, start, end)?;

        self.stats = SearchStats::default();

        let mut queue = VecDeque::from([start]);
        let mut visited = FxHashSet::default();
        let mut predecessors: FxHashMap<NodeId, NodeId> = FxHashMap::default();
        visited.insert(start);

        let mut found = false;

        while let Some(node) = queue.pop_front() {
            self.stats.iterations += 1;

            if node == end {
                found = true;
                break;
            }

            for edge in graph.node_edges(node) {
                self.stats.nodes_visited += 1;

                let next = edge.target();
                if visited.insert(next) {
                    predecessors.insert(next, node);
                    queue.push_back(next);
                }
            }
        }

        debug!(
            "bfs iterations: {}, nodes visited: {}",
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

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::{
        generator::build_random_graph,
        routing::path::Path,
        test_graph_utils::test_graph::{
            RomaniaGraphCity, all_simple_paths, assert_valid_path, create_diamond_graph,
            create_romania_graph,
        },
    };

    #[test]
    fn ignores_distances() {
        let graph = create_diamond_graph();
        let result = Bfs::new().calc_path(&graph, 0, 3).unwrap();
        assert_eq!(result, SearchResult::Found(Path::new(vec![0, 1, 3])));
    }

    #[test]
    fn isolated_node() {
        let graph = create_diamond_graph();
        assert_eq!(
            Bfs::new().calc_path(&graph, 0, 4),
            Ok(SearchResult::NotFound)
        );
    }

    #[test]
    fn start_is_end() {
        let graph = create_diamond_graph();
        assert_eq!(
            Bfs::new().calc_path(&graph, 4, 4),
            Ok(SearchResult::Found(Path::new(vec![4])))
        );
    }

    #[test]
    fn fewest_hops_on_romania() {
        let graph = create_romania_graph();
        let result = Bfs::new()
            .calc_path(
                &graph,
                RomaniaGraphCity::Arad.into(),
                RomaniaGraphCity::Bucharest.into(),
            )
            .unwrap();

        // Arad - Sibiu - Fagaras - Bucharest
        assert_eq!(result.path().map(Path::hops), Some(3));
    }

    #[test]
    fn minimal_hops_on_random_graphs() {
        let mut rng = SmallRng::seed_from_u64(99);

        for _ in 0..40 {
            let graph = build_random_graph(6, &mut rng).unwrap();

            for end in 0..6 {
                let result = Bfs::new().calc_path(&graph, 0, end).unwrap();
                let fewest = all_simple_paths(&graph, 0, end)
                    .iter()
                    .map(Path::hops)
                    .min();

                match (result.path(), fewest) {
                    (Some(path), Some(fewest)) => {
                        assert_valid_path(&graph, path, 0, end);
                        assert_eq!(path.hops(), fewest);
                    }
                    (None, None) => {}
                    (found, fewest) => panic!("bfs returned {found:?}, oracle {fewest:?}"),
                }
            }
        }
    }
}
