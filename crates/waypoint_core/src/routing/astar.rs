use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    distance::Distance, error::GraphError, graph::Graph, positions::Positions,
    priority_queue::PriorityQueue, stopwatch::Stopwatch, types::NodeId,
};

use super::{
    astar_heuristic::{AStarHeuristic, StraightLineHeuristic},
    path::SearchResult,
    reconstruct_path::reconstruct_path,
    shortest_path_algorithm::{SearchStats, ShortestPathAlgorithm, validate_endpoints},
};

/// https://en.wikipedia.org/wiki/A*_search_algorithm

struct NodeData {
    /// Cheapest known distance from the start node
    weight: Distance,
    parent: Option<NodeId>,
}

pub struct AStar<H: AStarHeuristic> {
    /// Keyed by f_score = g_score + h_score, g_score being the distance from the start
    heap: PriorityQueue<Distance>,
    data: FxHashMap<NodeId, NodeData>,
    heuristic: H,
    stats: SearchStats,
    name: &'static str,
}

impl<H: AStarHeuristic> AStar<H> {
    pub fn with_heuristic(heuristic: H) -> AStar<H> {
        Self::named("astar", heuristic)
    }

    pub(crate) fn named(name: &'static str, heuristic: H) -> AStar<H> {
        AStar {
            heap: PriorityQueue::new(0),
            data: FxHashMap::default(),
            heuristic,
            stats: SearchStats::default(),
            name,
        }
    }

    fn init(&mut self, graph: &Graph, start: NodeId, end: NodeId) {
        self.heap = PriorityQueue::new(graph.node_bound());
        self.data.clear();
        self.stats = SearchStats::default();

        let h_score = self.heuristic.estimate(start, end);
        let _ = self.heap.push(start, h_score);
        self.update_node_data(start, Distance::ZERO, None);
    }

    fn update_node_data(&mut self, node: NodeId, weight: Distance, parent: Option<NodeId>) {
        self.data.insert(node, NodeData { weight, parent });
    }

    /// `None` until the node is first reached.
    #[inline(always)]
    fn current_shortest_weight(&self, node: NodeId) -> Option<Distance> {
        self.data.get(&node).map(|data| data.weight)
    }
}

impl<H: AStarHeuristic> ShortestPathAlgorithm for AStar<H> {
    fn calc_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
    ) -> Result<SearchResult, GraphError> {
        let stopwatch = Stopwatch::start(self.name);
        validate_endpoints(graph, start, end)?;

        self.init(graph, start, end);

        let mut found = false;

        while let Some((node_id, _)) = self.heap.pop() {
            self.stats.iterations += 1;

            if node_id == end {
                found = true;
                break;
            }

            let Some(g_score) = self.current_shortest_weight(node_id) else {
                continue;
            };

            // A node popped earlier is queued again when a shorter route to it shows up,
            // which an overestimating heuristic can cause
            for edge in graph.node_edges(node_id) {
                let adj_node = edge.target();
                self.stats.nodes_visited += 1;

                let next_weight = g_score.saturating_add(edge.distance());

                if self
                    .current_shortest_weight(adj_node)
                    .is_none_or(|weight| next_weight < weight)
                {
                    self.update_node_data(adj_node, next_weight, Some(node_id));
                    let h_score = self.heuristic.estimate(adj_node, end);
                    self.heap
                        .push_or_decrease(adj_node, next_weight.saturating_add(h_score));
                }
            }
        }

        debug!(
            "{} iterations: {}, nodes visited: {}",
            self.name, self.stats.iterations, self.stats.nodes_visited
        );
        self.stats.elapsed = stopwatch.finish();

        if !found {
            return Ok(SearchResult::NotFound);
        }

        let path = reconstruct_path(start, end, |node| {
            self.data.get(&node).and_then(|data| data.parent)
        })?;

        Ok(SearchResult::Found(path))
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<'a> AStar<StraightLineHeuristic<'a>> {
    pub fn new(positions: &'a Positions) -> AStar<StraightLineHeuristic<'a>> {
        Self::with_heuristic(StraightLineHeuristic::new(positions))
    }
}
