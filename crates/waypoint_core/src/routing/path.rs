use serde::Serialize;

use crate::types::NodeId;

/// Ordered node sequence from a start node to an end node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Path {
        Path { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Path::new(nodes)
    }
}

/// Outcome of a search: a path, or the explicit absence of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum SearchResult {
    Found(Path),
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchResult::Found(path) => Some(path),
            SearchResult::NotFound => None,
        }
    }
}

impl From<Option<Path>> for SearchResult {
    fn from(path: Option<Path>) -> Self {
        match path {
            Some(path) => SearchResult::Found(path),
            None => SearchResult::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_and_hops() {
        let path = Path::new(vec![0, 2, 1, 3]);
        assert_eq!(path.hops(), 3);
        assert_eq!(path.steps().collect::<Vec<_>>(), vec![(0, 2), (2, 1), (1, 3)]);
        assert_eq!(path.start(), Some(0));
        assert_eq!(path.end(), Some(3));
    }

    #[test]
    fn single_node_path_has_no_steps() {
        let path = Path::new(vec![4]);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.steps().count(), 0);
    }

    #[test]
    fn not_found_is_distinct_from_empty_path() {
        let empty = SearchResult::Found(Path::new(vec![]));
        assert!(empty.is_found());
        assert_ne!(empty, SearchResult::NotFound);
        assert_eq!(SearchResult::NotFound.path(), None);
    }

    #[test]
    fn serializes_with_status_tag() {
        let found = SearchResult::Found(Path::new(vec![0, 1]));
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"status":"found","path":[0,1]}"#
        );
        assert_eq!(
            serde_json::to_string(&SearchResult::NotFound).unwrap(),
            r#"{"status":"not_found"}"#
        );
    }
}
