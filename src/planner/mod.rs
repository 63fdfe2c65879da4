//! Route planning
//!
//! This module provides the two planning strategies:
//! - Greedy nearest-neighbor tours over a set of cities
//! - Point-to-point routes: shortest path (Dijkstra), detour suggestions and
//!   the composed final route

pub mod composer;
pub mod detour;
pub mod dijkstra;
pub mod greedy;

use tracing::{debug, instrument};

use crate::config::DetourConfig;
use crate::graph::Graph;
use crate::models::{City, RouteResult, Suggestion};
use crate::{PlannerError, Result};

pub use dijkstra::ShortestPath;

/// Entry point for both planning modes
#[derive(Debug, Clone, Default)]
pub struct TravelPlanner {
    detour: DetourConfig,
}

impl TravelPlanner {
    #[must_use]
    pub fn new(detour: DetourConfig) -> Self {
        Self { detour }
    }

    /// Greedy tour from `start` over `must_visit`
    #[instrument(level = "debug", skip_all, fields(start = %start, stops = must_visit.len()))]
    pub fn plan_tour(
        &self,
        graph: &Graph,
        start: &City,
        must_visit: &[City],
        return_to_start: bool,
    ) -> Result<RouteResult> {
        let result = greedy::plan(graph, start, must_visit, return_to_start)?;
        debug!(
            "Greedy tour with {} stops, {:.2} km",
            result.route.len(),
            result.total_distance_km
        );
        Ok(result)
    }

    /// Shortest path from `start` to `end` plus suggested stops along the way
    #[instrument(level = "debug", skip_all, fields(start = %start, end = %end))]
    pub fn plan_route(&self, graph: &Graph, start: &City, end: &City) -> Result<RouteResult> {
        let direct = start.distance_to(end);

        let shortest = dijkstra::shortest_path(graph, start, end)?;
        if !shortest.is_reachable() {
            return Err(PlannerError::no_path(start.name.clone(), end.name.clone()));
        }

        let suggestions = detour::suggest(&self.detour, start, end, graph.cities());
        let suggested: Vec<City> = suggestions.iter().map(|s| s.city.clone()).collect();

        let route = composer::compose(start, end, &suggested, &shortest.path);
        let total = composer::route_distance(&route);

        debug!(
            "Route {} -> {}: {} stops, {} suggestions, {:.2} km",
            start.name,
            end.name,
            route.len(),
            suggestions.len(),
            total
        );

        let description = describe(start, end, &suggestions, direct, total, shortest.distance_km);
        Ok(RouteResult::intelligent(route, total, suggestions, description))
    }
}

/// Multi-line summary of a point-to-point route
fn describe(
    start: &City,
    end: &City,
    suggestions: &[Suggestion],
    direct_km: f64,
    total_km: f64,
    shortest_km: f64,
) -> String {
    let mut desc = format!("Travel from {} to {}:\n", start.name, end.name);
    desc.push_str(&format!("Direct distance: {direct_km:.1} km\n"));
    desc.push_str(&format!("Shortest path (Dijkstra): {shortest_km:.1} km\n"));

    if suggestions.is_empty() {
        desc.push_str("No interesting cities found along the route.\n");
        desc.push_str("Using Dijkstra's shortest path for optimal travel.");
    } else {
        let names: Vec<&str> = suggestions.iter().map(|s| s.city.name.as_str()).collect();
        desc.push_str(&format!("Suggested cities to visit: {}\n", names.join(", ")));
        desc.push_str(&format!(
            "Total route distance: {total_km:.1} km ({:.1} km detour from shortest path)\n",
            total_km - shortest_km
        ));
        desc.push_str("This route offers interesting stops while keeping the detour reasonable.");
    }

    desc
}
