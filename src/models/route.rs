//! Route results handed back to the caller for display

use serde::Serialize;

use super::City;

/// A city suggested as a worthwhile stop between start and end
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Suggestion {
    pub city: City,
    /// Extra kilometers compared to travelling straight from start to end
    pub detour_km: f64,
}

/// Which planner produced a result
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteMode {
    /// Greedy nearest-neighbor tour over a set of cities
    Tour,
    /// Shortest path between two cities with detour suggestions
    Intelligent,
}

/// Outcome of a planning call
#[derive(Debug, Clone, Serialize)]
pub struct RouteResult {
    /// Ordered cities, first is always the start
    pub route: Vec<City>,
    /// Total length of `route` in kilometers
    pub total_distance_km: f64,
    /// At most a handful of suggested stops, best first
    pub suggestions: Vec<Suggestion>,
    /// Human-readable summary, empty for tours
    pub description: String,
    pub mode: RouteMode,
}

impl RouteResult {
    /// Result of a greedy tour
    #[must_use]
    pub fn tour(route: Vec<City>, total_distance_km: f64) -> Self {
        Self {
            route,
            total_distance_km,
            suggestions: Vec::new(),
            description: String::new(),
            mode: RouteMode::Tour,
        }
    }

    /// Result of a point-to-point route with suggestions
    #[must_use]
    pub fn intelligent(
        route: Vec<City>,
        total_distance_km: f64,
        suggestions: Vec<Suggestion>,
        description: String,
    ) -> Self {
        Self {
            route,
            total_distance_km,
            suggestions,
            description,
            mode: RouteMode::Intelligent,
        }
    }

    #[must_use]
    pub fn is_intelligent_route(&self) -> bool {
        self.mode == RouteMode::Intelligent
    }

    /// Suggested cities in ranking order
    pub fn suggested_cities(&self) -> impl Iterator<Item = &City> {
        self.suggestions.iter().map(|s| &s.city)
    }

    /// Display names along the route
    #[must_use]
    pub fn route_names(&self) -> Vec<&str> {
        self.route.iter().map(|c| c.name.as_str()).collect()
    }
}
