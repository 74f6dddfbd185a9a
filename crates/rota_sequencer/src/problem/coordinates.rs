use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::kilometers::Kilometers;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Latitude/longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn haversine_distance(&self, to: &Coordinates) -> Kilometers {
        haversine_distance(self, to)
    }
}

/// Great-circle distance between two coordinates.
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> Kilometers {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Kilometers::new(EARTH_RADIUS_KM * c)
}

impl From<Coordinates> for geo::Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        geo::Point::new(coordinates.lng, coordinates.lat)
    }
}

impl From<&Coordinates> for geo::Point<f64> {
    fn from(coordinates: &Coordinates) -> Self {
        geo::Point::new(coordinates.lng, coordinates.lat)
    }
}

impl From<geo::Point<f64>> for Coordinates {
    fn from(point: geo::Point<f64>) -> Self {
        Coordinates::new(point.y(), point.x())
    }
}
