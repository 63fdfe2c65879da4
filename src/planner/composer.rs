//! Merge the shortest path with suggested stops into the final route

use tracing::debug;

use crate::models::City;

/// Build the route shown to the user.
///
/// - no suggestions: the shortest path as is
/// - any suggestion already on the shortest path: the shortest path as is,
///   off-path suggestions are left out of the route
/// - otherwise: start, then the suggestions in nearest-neighbor order by
///   straight-line distance, then end
#[must_use]
pub fn compose(start: &City, end: &City, suggested: &[City], shortest_path: &[City]) -> Vec<City> {
    if suggested.is_empty() {
        return shortest_path.to_vec();
    }

    if suggested.iter().any(|city| shortest_path.contains(city)) {
        debug!("Suggested stop already on the shortest path, keeping it");
        return shortest_path.to_vec();
    }

    let mut route = Vec::with_capacity(suggested.len() + 2);
    route.push(start.clone());

    let mut remaining: Vec<&City> = suggested.iter().collect();
    let mut current = start;
    while let Some((idx, _)) = remaining
        .iter()
        .map(|candidate| current.distance_to(candidate))
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(&b.1))
    {
        let next = remaining.remove(idx);
        route.push(next.clone());
        current = next;
    }

    route.push(end.clone());
    route
}

/// Sum of great-circle distances between consecutive cities
#[must_use]
pub fn route_distance(route: &[City]) -> f64 {
    route.windows(2).map(|leg| leg[0].distance_to(&leg[1])).sum()
}
