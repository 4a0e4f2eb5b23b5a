use serde::{Deserialize, Serialize};

use crate::{error::GraphError, geopoint::GeoPoint, graph::Graph, types::NodeId};

/// Geographic coordinates of the nodes of a graph, indexed by node id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Positions {
    points: Vec<GeoPoint>,
}

impl Positions {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Positions { points }
    }

    pub fn get(&self, node: NodeId) -> Option<&GeoPoint> {
        self.points.get(node)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GeoPoint)> {
        self.points.iter().enumerate()
    }

    /// Fails on the first node of `graph` without a position.
    pub fn ensure_covers(&self, graph: &Graph) -> Result<(), GraphError> {
        match graph.nodes().iter().find(|&&node| self.get(node).is_none()) {
            Some(&node) => Err(GraphError::MissingPosition(node)),
            None => Ok(()),
        }
    }
}

impl FromIterator<GeoPoint> for Positions {
    fn from_iter<T: IntoIterator<Item = GeoPoint>>(iter: T) -> Self {
        Positions {
            points: iter.into_iter().collect(),
        }
    }
}

/// Latitude/longitude rectangle random positions are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub const CENTRAL_LONDON: BoundingBox = BoundingBox {
        min_lat: 51.48,
        max_lat: 51.52,
        min_lng: -0.1,
        max_lng: -0.06,
    };

    pub fn contains(&self, point: &GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        BoundingBox::CENTRAL_LONDON
    }
}
