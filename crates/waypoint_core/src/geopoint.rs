use geo::{Distance as _, Euclidean, Haversine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        GeoPoint { lat, lng }
    }

    /// Straight-line distance in coordinate space (degrees).
    pub fn euclidean_distance(&self, other: &GeoPoint) -> f64 {
        Euclidean.distance(geo::Point::from(self), geo::Point::from(other))
    }

    /// Great-circle distance in meters.
    pub fn haversine_distance(&self, other: &GeoPoint) -> f64 {
        Haversine.distance(geo::Point::from(self), geo::Point::from(other))
    }
}

impl From<&GeoPoint> for geo::Point<f64> {
    fn from(point: &GeoPoint) -> Self {
        geo::Point::new(point.lng, point.lat)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        GeoPoint { lat, lng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance_in_degrees() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert!((a.euclidean_distance(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn haversine_distance_in_meters() {
        // Roughly 111km per degree of latitude
        let a = GeoPoint::new(51.0, 0.0);
        let b = GeoPoint::new(52.0, 0.0);
        let distance = a.haversine_distance(&b);
        assert!(distance > 110_000.0 && distance < 112_500.0);
    }

    #[test]
    fn distance_to_itself_is_zero() {
        let a = GeoPoint::new(51.5, -0.08);
        assert_eq!(a.euclidean_distance(&a), 0.0);
        assert_eq!(a.haversine_distance(&a), 0.0);
    }
}
