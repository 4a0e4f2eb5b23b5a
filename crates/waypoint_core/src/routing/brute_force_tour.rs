use fxhash::FxHashSet;
use tracing::debug;

use crate::{
    distance::Distance, error::GraphError, graph::Graph, stopwatch::Stopwatch, types::NodeId,
};

use super::{
    path::{Path, SearchResult},
    shortest_path_algorithm::{SearchStats, ShortestPathAlgorithm, validate_endpoints},
};

pub const DEFAULT_MAX_TOUR_NODES: usize = 10;

/// Exhaustive search for the cheapest tour.
///
/// Starting at the start node, every ordering of the remaining nodes is enumerated along
/// existing edges. Once all nodes are visited, the edge from the last node to the end
/// node closes the tour, so the end node appears a second time at the end of the
/// returned path. Orderings that cannot be closed are discarded. The running time is
/// factorial in the number of nodes, graphs over `max_nodes` are rejected.
pub struct BruteForceTour {
    max_nodes: usize,
    stats: SearchStats,
}

impl Default for BruteForceTour {
    fn default() -> Self {
        BruteForceTour::new(DEFAULT_MAX_TOUR_NODES)
    }
}

impl BruteForceTour {
    pub fn new(max_nodes: usize) -> Self {
        BruteForceTour {
            max_nodes,
            stats: SearchStats::default(),
        }
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }
}

struct TourSearch<'a> {
    graph: &'a Graph,
    end: NodeId,
    visited: FxHashSet<NodeId>,
    path: Vec<NodeId>,
    best: Option<(Distance, Vec<NodeId>)>,
    stats: &'a mut SearchStats,
}

impl TourSearch<'_> {
    fn explore(&mut self, node: NodeId, distance: Distance) {
        self.stats.iterations += 1;

        let graph = self.graph;
        if self.path.len() == graph.node_count() {
            self.close_tour(node, distance);
            return;
        }

        for edge in graph.node_edges(node) {
            self.stats.nodes_visited += 1;

            let next = edge.target();
            if !self.visited.insert(next) {
                continue;
            }

            self.path.push(next);
            self.explore(next, distance + edge.distance());
            self.path.pop();
            self.visited.remove(&next);
        }
    }

    fn close_tour(&mut self, last: NodeId, distance: Distance) {
        let Some(edge) = self.graph.edge_between(last, self.end) else {
            return;
        };

        let total = distance + edge.distance();
        if self
            .best
            .as_ref()
            .is_none_or(|(best_distance, _)| total < *best_distance)
        {
            let mut tour = self.path.clone();
            tour.push(self.end);
            self.best = Some((total, tour));
        }
    }
}

impl ShortestPathAlgorithm for BruteForceTour {
    fn calc_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchResult, GraphError> {
        let stopwatch = Stopwatch::start("brute_force_tour");
        validate_endpoints(graph, start, end)?;

        if graph.node_count() > self.max_nodes {
            return Err(GraphError::TourTooLarge {
                nodes: graph.node_count(),
                max: self.max_nodes,
            });
        }

        self.stats = SearchStats::default();

        let mut search = TourSearch {
            graph,
            end,
            visited: FxHashSet::from_iter([start]),
            path: vec![start],
            best: None,
            stats: &mut self.stats,
        };
        search.explore(start, Distance::ZERO);
        let best = search.best;

        debug!(
            "brute_force_tour iterations: {}, nodes visited: {}",
            self.stats.iterations, self.stats.nodes_visited
        );
        self.stats.elapsed = stopwatch.finish();

        Ok(best.map(|(_, tour)| Path::new(tour)).into())
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::SmallRng};

    use super::*;
    use crate::{
        distance,
        routing::total_distance::total_distance,
        test_graph_utils::test_graph::{all_simple_paths, assert_valid_path, create_diamond_graph},
    };

    fn complete_graph(distances: &[[i64; 4]; 4]) -> Graph {
        let mut graph = Graph::with_nodes(4);
        for (i, row) in distances.iter().enumerate() {
            for (j, &distance) in row.iter().enumerate() {
                if i != j {
                    graph.add_edge(i, j, distance).unwrap();
                }
            }
        }
        graph
    }

    #[test]
    fn cheapest_tour_returns_to_end() {
        let graph = complete_graph(&[
            [0, 1, 10, 10],
            [10, 0, 1, 10],
            [10, 10, 0, 1],
            [1, 10, 10, 0],
        ]);

        let result = BruteForceTour::default().calc_path(&graph, 0, 0).unwrap();

        let path = result.path().unwrap();
        assert_eq!(path.nodes(), &[0, 1, 2, 3, 0]);
        assert_eq!(total_distance(&graph, path), Ok(distance!(4)));
    }

    #[test]
    fn end_node_is_appended_after_full_visit() {
        let graph = complete_graph(&[
            [0, 1, 10, 10],
            [10, 0, 1, 10],
            [10, 10, 0, 1],
            [1, 10, 10, 0],
        ]);

        let result = BruteForceTour::default().calc_path(&graph, 0, 3).unwrap();

        let path = result.path().unwrap();
        assert_eq!(path.len(), graph.node_count() + 1);
        assert_eq!(path.end(), Some(3));
        assert_valid_path(&graph, path, 0, 3);
    }

    #[test]
    fn no_full_length_path() {
        // Node 4 has no incoming edge
        let graph = create_diamond_graph();
        assert_eq!(
            BruteForceTour::default().calc_path(&graph, 0, 3),
            Ok(SearchResult::NotFound)
        );
    }

    #[test]
    fn single_node_needs_a_loop() {
        let mut graph = Graph::with_nodes(1);
        assert_eq!(
            BruteForceTour::default().calc_path(&graph, 0, 0),
            Ok(SearchResult::NotFound)
        );

        graph.add_edge(0, 0, 2).unwrap();
        let result = BruteForceTour::default().calc_path(&graph, 0, 0).unwrap();
        assert_eq!(result.path().map(Path::nodes), Some(&[0, 0][..]));
    }

    #[test]
    fn rejects_large_graphs() {
        let graph = Graph::with_nodes(11);
        assert_eq!(
            BruteForceTour::default().calc_path(&graph, 0, 10),
            Err(GraphError::TourTooLarge { nodes: 11, max: 10 })
        );
        assert!(BruteForceTour::new(11).calc_path(&graph, 0, 10).is_ok());
    }

    #[test]
    fn minimal_on_random_complete_graphs() {
        let mut rng = SmallRng::seed_from_u64(8);

        for _ in 0..20 {
            let mut graph = Graph::with_nodes(5);
            for i in 0..5 {
                for j in 0..5 {
                    if i != j {
                        graph.add_edge(i, j, rng.random_range(1..=100_i64)).unwrap();
                    }
                }
            }

            let result = BruteForceTour::default().calc_path(&graph, 0, 4).unwrap();
            let path = result.path().expect("complete graphs always have a tour");
            assert_valid_path(&graph, path, 0, 4);

            let mut visited = path.nodes()[..5].to_vec();
            visited.sort_unstable();
            assert_eq!(visited, vec![0, 1, 2, 3, 4]);

            let best = (0..5)
                .flat_map(|last| all_simple_paths(&graph, 0, last))
                .filter(|candidate| candidate.len() == 5)
                .filter_map(|candidate| {
                    let last = candidate.end()?;
                    let closing = graph.edge_between(last, 4)?.distance();
                    Some(total_distance(&graph, &candidate).unwrap() + closing)
                })
                .min();

            assert_eq!(total_distance(&graph, path).ok(), best);
        }
    }
}
