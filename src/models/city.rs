//! City model: a named point with case-insensitive identity

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::geo;

/// A city on the map.
///
/// Identity is the lower-cased name. Two cities with the same name in
/// different casing are the same city even if their coordinates differ.
#[derive(Debug, Clone, Serialize)]
pub struct City {
    /// Display name, original casing
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    #[serde(skip)]
    key: String,
}

impl City {
    /// Create a new city
    #[must_use]
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        let name = name.into();
        let key = Self::normalize(&name);
        Self {
            name,
            latitude,
            longitude,
            key,
        }
    }

    /// Normalized lookup key for a city name
    #[must_use]
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Identity key used for equality, hashing and graph lookup
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Great-circle distance to another city in kilometers
    #[must_use]
    pub fn distance_to(&self, other: &City) -> f64 {
        geo::distance_km(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

impl PartialEq for City {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for City {}

impl Hash for City {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
