//! Great-circle distance between coordinates

use haversine::{Location as HaversineLocation, Units, distance};

/// Haversine distance in kilometers (Earth radius 6371 km).
///
/// Coordinates are not validated; out-of-range or NaN input yields
/// whatever the trigonometry produces.
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let from = HaversineLocation {
        latitude: lat1,
        longitude: lon1,
    };
    let to = HaversineLocation {
        latitude: lat2,
        longitude: lon2,
    };
    distance(from, to, Units::Kilometers)
}
