use fxhash::{FxHashMap, FxHashSet};

use crate::{error::GraphError, types::NodeId};

use super::path::Path;

/// Walks predecessors from `end` back to `start` and returns the path in travel order.
///
/// Fails when the chain stops, or loops, before reaching `start`.
pub fn reconstruct_path<F>(start: NodeId, end: NodeId, predecessor: F) -> Result<Path, GraphError>
where
    F: Fn(NodeId) -> Option<NodeId>,
{
    let broken = || GraphError::BrokenPredecessorChain { start, end };

    let mut nodes = vec![end];
    let mut seen = FxHashSet::default();
    seen.insert(end);

    let mut node = end;
    while node != start {
        node = predecessor(node).ok_or_else(broken)?;
        if !seen.insert(node) {
            return Err(broken());
        }
        nodes.push(node);
    }

    nodes.reverse();

    Ok(Path::new(nodes))
}

pub fn reconstruct_path_from_map(
    start: NodeId,
    end: NodeId,
    predecessors: &FxHashMap<NodeId, NodeId>,
) -> Result<Path, GraphError> {
    reconstruct_path(start, end, |node| predecessors.get(&node).copied())
}
