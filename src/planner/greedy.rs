//! Greedy nearest-neighbor tour
//!
//! Not optimal like a real TSP solver, but fast and simple.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::Graph;
use crate::models::{City, RouteResult};
use crate::{PlannerError, Result};

/// Visit every city in `must_visit` starting from `start`, always moving to
/// the closest remaining one.
///
/// `must_visit` is treated as a set; repeated names are ignored and ties
/// go to whichever city appears first in it. With `return_to_start` the
/// route is closed by appending `start` once more, unless the route is just
/// `[start]`.
pub fn plan(
    graph: &Graph,
    start: &City,
    must_visit: &[City],
    return_to_start: bool,
) -> Result<RouteResult> {
    let mut seen = HashSet::new();
    seen.insert(start.key());
    let mut remaining: Vec<&City> = must_visit
        .iter()
        .filter(|city| seen.insert(city.key()))
        .collect();

    let mut route = vec![start.clone()];
    let mut current = start;
    let mut distance = 0.0;

    while !remaining.is_empty() {
        let mut next = None;
        let mut best = f64::INFINITY;
        for (idx, candidate) in remaining.iter().enumerate() {
            let d = leg_distance(graph, current, candidate);
            if d < best {
                best = d;
                next = Some(idx);
            }
        }

        let Some(idx) = next else {
            return Err(PlannerError::unreachable(current.name.clone()));
        };

        let city = remaining.remove(idx);
        debug!("Next stop {} ({:.1} km from {})", city.name, best, current.name);
        distance += best;
        route.push(city.clone());
        current = city;
    }

    if return_to_start && route.len() > 1 {
        distance += leg_distance(graph, current, start);
        route.push(start.clone());
    }

    Ok(RouteResult::tour(route, distance))
}

/// Direct edge distance, falling back to the great-circle estimate when the
/// graph has no edge between the two cities
fn leg_distance(graph: &Graph, from: &City, to: &City) -> f64 {
    graph
        .edge_distance(from, to)
        .unwrap_or_else(|| from.distance_to(to))
}
