use crate::{distance::Distance, positions::Positions, types::NodeId};

/// Estimated remaining distance from a node to the end node.
///
/// A* only returns shortest paths when the estimate never exceeds the real remaining
/// distance.
pub trait AStarHeuristic {
    fn estimate(&self, node: NodeId, end: NodeId) -> Distance;
}

/// Always zero. A* with this heuristic behaves exactly like Dijkstra.
pub struct ZeroHeuristic;

impl AStarHeuristic for ZeroHeuristic {
    #[inline(always)]
    fn estimate(&self, _node: NodeId, _end: NodeId) -> Distance {
        Distance::ZERO
    }
}

/// Straight-line distance between node coordinates, in degrees.
///
/// Coordinates of generated graphs are unrelated to edge distances, so this estimate is
/// not guaranteed to be admissible.
pub struct StraightLineHeuristic<'a> {
    positions: &'a Positions,
}

impl<'a> StraightLineHeuristic<'a> {
    pub fn new(positions: &'a Positions) -> Self {
        StraightLineHeuristic { positions }
    }
}

impl AStarHeuristic for StraightLineHeuristic<'_> {
    fn estimate(&self, node: NodeId, end: NodeId) -> Distance {
        match (self.positions.get(node), self.positions.get(end)) {
            (Some(from), Some(to)) => Distance::from(from.euclidean_distance(to)),
            // Unknown coordinates carry no information
            _ => Distance::ZERO,
        }
    }
}

/// Great-circle distance between node coordinates, in kilometers.
///
/// Admissible when edge distances are road kilometers between the same coordinates.
pub struct HaversineHeuristic<'a> {
    positions: &'a Positions,
}

impl<'a> HaversineHeuristic<'a> {
    pub fn new(positions: &'a Positions) -> Self {
        HaversineHeuristic { positions }
    }
}

impl AStarHeuristic for HaversineHeuristic<'_> {
    fn estimate(&self, node: NodeId, end: NodeId) -> Distance {
        match (self.positions.get(node), self.positions.get(end)) {
            (Some(from), Some(to)) => Distance::from(from.haversine_distance(to) / 1000.0),
            _ => Distance::ZERO,
        }
    }
}

impl<H: AStarHeuristic + ?Sized> AStarHeuristic for &H {
    fn estimate(&self, node: NodeId, end: NodeId) -> Distance {
        (**self).estimate(node, end)
    }
}

impl<H: AStarHeuristic + ?Sized> AStarHeuristic for Box<H> {
    fn estimate(&self, node: NodeId, end: NodeId) -> Distance {
        (**self).estimate(node, end)
    }
}
