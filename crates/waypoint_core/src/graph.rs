use std::fmt;

use fxhash::FxHashMap;
use serde::Serialize;

use crate::{
    distance::{Distance, IntoDistance, InvalidDistance},
    error::GraphError,
    types::NodeId,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    target: NodeId,
    distance: Distance,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<String>,
}

impl Edge {
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    /// Free-text label (e.g. "north"), informational only.
    pub fn direction(&self) -> Option<&str> {
        self.direction.as_deref()
    }
}

/// Weighted directed graph.
///
/// Nodes keep their registration order and every node owns the list of its outgoing
/// edges in insertion order. Edge targets must be registered before the edge is added.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    nodes: Vec<NodeId>,
    adjacency_list: FxHashMap<NodeId, Vec<Edge>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_node: Option<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end_node: Option<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Graph with nodes `0..node_count` and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        let mut graph = Graph {
            nodes: Vec::with_capacity(node_count),
            adjacency_list: FxHashMap::default(),
            start_node: None,
            end_node: None,
        };
        for node in 0..node_count {
            graph.add_node(node);
        }
        graph
    }

    /// Registers a node. Adding an existing node keeps its edges.
    pub fn add_node(&mut self, node: NodeId) {
        if self.adjacency_list.contains_key(&node) {
            return;
        }

        self.nodes.push(node);
        self.adjacency_list.insert(node, vec![]);
    }

    pub fn add_edge<D: IntoDistance>(
        &mut self,
        source: NodeId,
        target: NodeId,
        distance: D,
    ) -> Result<(), GraphError> {
        self.push_edge(source, target, distance, None)
    }

    pub fn add_edge_with_direction<D: IntoDistance>(
        &mut self,
        source: NodeId,
        target: NodeId,
        distance: D,
        direction: impl Into<String>,
    ) -> Result<(), GraphError> {
        self.push_edge(source, target, distance, Some(direction.into()))
    }

    fn push_edge<D: IntoDistance>(
        &mut self,
        source: NodeId,
        target: NodeId,
        distance: D,
        direction: Option<String>,
    ) -> Result<(), GraphError> {
        if !self.contains_node(target) {
            return Err(GraphError::UnknownNode(target));
        }

        let distance = distance.into_distance().map_err(|invalid| match invalid {
            InvalidDistance::NonFinite => GraphError::NonFiniteDistance {
                source_node: source,
                target,
            },
            InvalidDistance::OutOfRange(distance) => GraphError::DistanceOutOfRange {
                source_node: source,
                target,
                distance,
            },
        })?;

        if distance.is_negative() {
            return Err(GraphError::NegativeDistance {
                source_node: source,
                target,
                distance: distance.value(),
            });
        }

        let edges = self
            .adjacency_list
            .get_mut(&source)
            .ok_or(GraphError::UnknownNode(source))?;

        edges.push(Edge {
            target,
            distance,
            direction,
        });

        Ok(())
    }

    pub fn set_start_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        self.ensure_node(node)?;
        self.start_node = Some(node);
        Ok(())
    }

    pub fn set_end_node(&mut self, node: NodeId) -> Result<(), GraphError> {
        self.ensure_node(node)?;
        self.end_node = Some(node);
        Ok(())
    }

    pub fn start_node(&self) -> Option<NodeId> {
        self.start_node
    }

    pub fn end_node(&self) -> Option<NodeId> {
        self.end_node
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency_list.contains_key(&node)
    }

    pub(crate) fn ensure_node(&self, node: NodeId) -> Result<(), GraphError> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(node))
        }
    }

    /// Outgoing edges of `node` in insertion order, empty for an unknown node.
    pub fn node_edges(&self, node: NodeId) -> &[Edge] {
        self.adjacency_list
            .get(&node)
            .map(|edges| &edges[..])
            .unwrap_or_default()
    }

    /// The shortest direct edge from `from` to `to`, if any.
    pub fn edge_between(&self, from: NodeId, to: NodeId) -> Option<&Edge> {
        self.node_edges(from)
            .iter()
            .filter(|edge| edge.target == to)
            .min_by_key(|edge| edge.distance)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency_list.values().map(Vec::len).sum()
    }

    /// One past the highest registered node id, used to size per-node tables.
    pub fn node_bound(&self) -> usize {
        self.nodes.iter().max().map_or(0, |max| max + 1)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &node in &self.nodes {
            let targets = self
                .node_edges(node)
                .iter()
                .map(|edge| match edge.direction() {
                    Some(direction) => {
                        format!("{} ({} km, {})", edge.target, edge.distance, direction)
                    }
                    None => format!("{} ({} km)", edge.target, edge.distance),
                })
                .collect::<Vec<_>>();

            writeln!(f, "Node {} is connected to: {}", node, targets.join(", "))?;
        }

        Ok(())
    }
}
