#[cfg(test)]
pub mod test_graph {

    use fxhash::FxHashSet;
    use rand::Rng;

    use crate::{
        distance::Distance,
        generator::{build_random_graph, random_positions},
        graph::Graph,
        positions::Positions,
        routing::path::Path,
        types::NodeId,
    };

    /// 0 -> 1 (5), 0 -> 2 (2), 2 -> 1 (1), 1 -> 3 (1). Node 4 has no edges.
    pub fn create_diamond_graph() -> Graph {
        let mut graph = Graph::with_nodes(5);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_edge(2, 1, 1).unwrap();
        graph.add_edge(1, 3, 1).unwrap();
        graph
    }

    pub enum RomaniaGraphCity {
        Arad = 1,
        Bucharest = 2,
        Craiova = 3,
        Dobreta = 4,
        Eforie = 5,
        Fagaras = 6,
        Giurgiu = 7,
        Hirsova = 8,
        Iasi = 9,
        Lugoj = 10,
        Mehadia = 11,
        Neamt = 12,
        Oradea = 13,
        Pitesti = 14,
        RimnicuVilcea = 15,
        Sibiu = 16,
        Timisoara = 17,
        Urziceni = 18,
        Vaslui = 19,
        Zerind = 20,
    }

    impl From<RomaniaGraphCity> for usize {
        fn from(value: RomaniaGraphCity) -> Self {
            value as usize
        }
    }

    // https://user-images.githubusercontent.com/43790152/97784960-1a142580-1bc4-11eb-9070-39c03eb16df2.png
    fn get_romania_graph_edges() -> Vec<(RomaniaGraphCity, RomaniaGraphCity, i64)> {
        use RomaniaGraphCity::*;

        vec![
            (Oradea, Zerind, 71),
            (Oradea, Sibiu, 151),
            (Zerind, Arad, 75),
            (Arad, Sibiu, 140),
            (Arad, Timisoara, 118),
            (Timisoara, Lugoj, 111),
            (Lugoj, Mehadia, 70),
            (Mehadia, Dobreta, 75),
            (Dobreta, Craiova, 120),
            (Craiova, RimnicuVilcea, 146),
            (Craiova, Pitesti, 138),
            (RimnicuVilcea, Pitesti, 97),
            (RimnicuVilcea, Sibiu, 80),
            (Sibiu, Fagaras, 99),
            (Fagaras, Bucharest, 211),
            (Pitesti, Bucharest, 101),
            (Bucharest, Giurgiu, 90),
            (Bucharest, Urziceni, 85),
            (Urziceni, Hirsova, 98),
            (Hirsova, Eforie, 86),
            (Urziceni, Vaslui, 142),
            (Vaslui, Iasi, 92),
            (Iasi, Neamt, 87),
        ]
    }

    /// Roads are two-way, every road is added in both directions. Node 0 is unused.
    pub fn create_romania_graph() -> Graph {
        let mut graph = Graph::with_nodes(21);

        for (from, to, distance) in get_romania_graph_edges() {
            let (from, to): (NodeId, NodeId) = (from.into(), to.into());
            graph.add_edge(from, to, distance).unwrap();
            graph.add_edge(to, from, distance).unwrap();
        }

        graph
    }

    /// Random topology whose edge distances are 1.25 times the great-circle kilometers
    /// between random positions, so the haversine estimate never overshoots.
    pub fn create_geometric_graph<R: Rng>(node_count: usize, rng: &mut R) -> (Graph, Positions) {
        let topology = build_random_graph(node_count, rng).unwrap();
        let positions = random_positions(node_count, rng).unwrap();

        let mut graph = Graph::with_nodes(node_count);
        for &node in topology.nodes() {
            for edge in topology.node_edges(node) {
                let from = positions.get(node).unwrap();
                let to = positions.get(edge.target()).unwrap();
                let km = from.haversine_distance(to) / 1000.0;
                graph.add_edge(node, edge.target(), km * 1.25).unwrap();
            }
        }

        (graph, positions)
    }

    pub fn assert_valid_path(graph: &Graph, path: &Path, start: NodeId, end: NodeId) {
        assert_eq!(path.start(), Some(start), "path {path:?} does not begin at {start}");
        assert_eq!(path.end(), Some(end), "path {path:?} does not finish at {end}");

        for (from, to) in path.steps() {
            assert!(
                graph.edge_between(from, to).is_some(),
                "path {path:?} uses missing edge {from} -> {to}"
            );
        }
    }

    /// Every path from `start` to `end` without repeated nodes.
    pub fn all_simple_paths(graph: &Graph, start: NodeId, end: NodeId) -> Vec<Path> {
        fn walk(
            graph: &Graph,
            node: NodeId,
            end: NodeId,
            visited: &mut FxHashSet<NodeId>,
            current: &mut Vec<NodeId>,
            paths: &mut Vec<Path>,
        ) {
            if node == end {
                paths.push(Path::new(current.clone()));
                return;
            }

            for edge in graph.node_edges(node) {
                let next = edge.target();
                if visited.insert(next) {
                    current.push(next);
                    walk(graph, next, end, visited, current, paths);
                    current.pop();
                    visited.remove(&next);
                }
            }
        }

        let mut paths = vec![];
        let mut visited = FxHashSet::from_iter([start]);
        let mut current = vec![start];
        walk(graph, start, end, &mut visited, &mut current, &mut paths);
        paths
    }

    #[test]
    fn diamond_shape() {
        let graph = create_diamond_graph();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(all_simple_paths(&graph, 0, 3).len(), 2);
        assert_eq!(all_simple_paths(&graph, 3, 3), vec![Path::new(vec![3])]);
    }

    #[test]
    fn romania_is_symmetric() {
        let graph = create_romania_graph();
        assert_eq!(graph.edge_count(), 46);
        assert_eq!(
            graph
                .edge_between(RomaniaGraphCity::Arad.into(), RomaniaGraphCity::Sibiu.into())
                .map(|edge| edge.distance()),
            Some(Distance::from(140))
        );
        assert_eq!(
            graph
                .edge_between(RomaniaGraphCity::Sibiu.into(), RomaniaGraphCity::Arad.into())
                .map(|edge| edge.distance()),
            Some(Distance::from(140))
        );
    }
}
