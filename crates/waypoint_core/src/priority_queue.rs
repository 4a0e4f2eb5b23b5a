use std::cmp::Ordering;

use thiserror::Error;

use crate::types::NodeId;

/// Binary min-heap of node ids with decrease-key.
///
/// `positions[id]` holds the heap slot of `id` while it is queued, so a node is queued
/// at most once and lowering its priority is a sift-up instead of a duplicate entry.
/// Ties between equal priorities are served in no particular order.
pub struct PriorityQueue<P>
where
    P: Ord,
{
    heap: Vec<(NodeId, P)>,
    positions: Vec<Option<usize>>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PriorityQueueError {
    #[error("Element {0} already exists in the priority queue")]
    ElementAlreadyExists(NodeId),
}

impl<P> PriorityQueue<P>
where
    P: Ord + Copy,
{
    /// `node_bound` pre-sizes the position table, larger ids are still accepted.
    pub fn new(node_bound: usize) -> Self {
        Self {
            heap: Vec::with_capacity(node_bound.min(1024)),
            positions: vec![None; node_bound],
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.positions.get(id).copied().flatten().is_some()
    }

    pub fn priority(&self, id: NodeId) -> Option<P> {
        self.positions
            .get(id)
            .copied()
            .flatten()
            .map(|position| self.heap[position].1)
    }

    pub fn push(&mut self, id: NodeId, priority: P) -> Result<(), PriorityQueueError> {
        if self.contains(id) {
            return Err(PriorityQueueError::ElementAlreadyExists(id));
        }

        if id >= self.positions.len() {
            self.positions.resize(id + 1, None);
        }

        self.heap.push((id, priority));
        let last = self.heap.len() - 1;
        self.positions[id] = Some(last);
        self.sift_up(last);

        Ok(())
    }

    /// Queues `id`, or lowers its priority if it is already queued with a higher one.
    /// Returns false when the queued priority was already lower or equal.
    pub fn push_or_decrease(&mut self, id: NodeId, priority: P) -> bool {
        match self.priority(id) {
            Some(current) if priority >= current => false,
            Some(_) => {
                self.update_priority(id, priority);
                true
            }
            None => {
                // `contains` was just checked through `priority`
                let _ = self.push(id, priority);
                true
            }
        }
    }

    pub fn peek(&self) -> Option<&(NodeId, P)> {
        self.heap.first()
    }

    pub fn pop(&mut self) -> Option<(NodeId, P)> {
        if self.heap.is_empty() {
            return None;
        }

        let (id, priority) = self.heap.swap_remove(0);
        self.positions[id] = None;

        if !self.heap.is_empty() {
            // The last element was moved to the root
            self.positions[self.heap[0].0] = Some(0);
            self.sift_down(0);
        }

        Some((id, priority))
    }

    pub fn update_priority(&mut self, id: NodeId, priority: P) {
        if let Some(position) = self.positions.get(id).copied().flatten() {
            let current_priority = self.heap[position].1;
            self.heap[position].1 = priority;

            match priority.cmp(&current_priority) {
                Ordering::Greater => self.sift_down(position),
                Ordering::Less => self.sift_up(position),
                Ordering::Equal => {}
            }
        }
    }

    pub fn clear(&mut self) {
        self.positions.fill(None);
        self.heap.clear();
    }

    fn sift_up(&mut self, element_index: usize) {
        let mut index = element_index;
        while index > 0 {
            let parent_index = (index - 1) / 2;
            if self.heap[index].1 >= self.heap[parent_index].1 {
                break;
            }

            self.swap(index, parent_index);
            index = parent_index;
        }
    }

    fn sift_down(&mut self, element_index: usize) {
        let size = self.heap.len();
        let mut index = element_index;

        loop {
            let left_child_index = 2 * index + 1;
            let right_child_index = left_child_index + 1;

            if left_child_index >= size {
                break;
            }

            let mut child_index = left_child_index;
            if right_child_index < size
                && self.heap[right_child_index].1 < self.heap[left_child_index].1
            {
                child_index = right_child_index;
            }

            if self.heap[index].1 <= self.heap[child_index].1 {
                break;
            }

            self.swap(index, child_index);
            index = child_index;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].0] = Some(a);
        self.positions[self.heap[b].0] = Some(b);
    }
}
