//! Shortest path between two cities
//!
//! Binary heap with lazy deletion: stale heap entries are skipped when popped
//! instead of being updated in place.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, instrument};

use crate::graph::{CityId, Graph};
use crate::models::City;
use crate::{PlannerError, Result};

/// Path found by [`shortest_path`]
#[derive(Debug, Clone)]
pub struct ShortestPath {
    /// Cities from start to end. Only `[end]` when the end is unreachable.
    pub path: Vec<City>,
    /// Total edge weight, `f64::INFINITY` when the end is unreachable
    pub distance_km: f64,
}

impl ShortestPath {
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.distance_km.is_finite()
    }
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: CityId,
}

// Min-heap by cost
impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra from `start`, stopping as soon as `end` is settled.
///
/// Both cities must be part of the graph. An unreachable `end` is not an
/// error here; check [`ShortestPath::is_reachable`].
#[instrument(level = "debug", skip_all, fields(start = %start, end = %end))]
pub fn shortest_path(graph: &Graph, start: &City, end: &City) -> Result<ShortestPath> {
    let source = graph
        .id_of(start)
        .ok_or_else(|| PlannerError::city_not_found(start.name.clone()))?;
    let target = graph
        .id_of(end)
        .ok_or_else(|| PlannerError::city_not_found(end.name.clone()))?;

    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<CityId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[source.0] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost > dist[node.0] {
            continue;
        }
        if node == target {
            break;
        }
        for edge in graph.edges_from(node) {
            let next_cost = cost + edge.distance_km;
            if next_cost < dist[edge.to.0] {
                dist[edge.to.0] = next_cost;
                prev[edge.to.0] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: edge.to,
                });
            }
        }
    }

    let distance_km = dist[target.0];
    if !distance_km.is_finite() {
        debug!("No path from {} to {}", start.name, end.name);
        return Ok(ShortestPath {
            path: vec![graph.city(target).clone()],
            distance_km: f64::INFINITY,
        });
    }

    let mut path = vec![graph.city(target).clone()];
    let mut current = target;
    while let Some(p) = prev[current.0] {
        path.push(graph.city(p).clone());
        current = p;
    }
    path.reverse();

    debug!("Shortest path has {} stops, {:.1} km", path.len(), distance_km);
    Ok(ShortestPath { path, distance_km })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph, City, City, City) {
        let a = City::new("A", 0.0, 0.0);
        let b = City::new("B", 0.0, 0.0);
        let c = City::new("C", 0.0, 0.0);
        let mut graph = Graph::new();
        graph.add_undirected_edge(&a, &b, 10.0);
        graph.add_undirected_edge(&b, &c, 10.0);
        graph.add_undirected_edge(&a, &c, 100.0);
        (graph, a, b, c)
    }

    fn names(path: &ShortestPath) -> Vec<&str> {
        path.path.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_prefers_two_short_edges_over_long_one() {
        let (graph, a, _, c) = triangle();
        let result = shortest_path(&graph, &a, &c).unwrap();

        assert_eq!(names(&result), vec!["A", "B", "C"]);
        assert_eq!(result.distance_km, 20.0);
        assert!(result.is_reachable());
    }

    #[test]
    fn test_path_to_self() {
        let (graph, a, _, _) = triangle();
        let result = shortest_path(&graph, &a, &a).unwrap();

        assert_eq!(names(&result), vec!["A"]);
        assert_eq!(result.distance_km, 0.0);
    }

    #[test]
    fn test_unreachable_destination() {
        let (mut graph, a, _, _) = triangle();
        let island = City::new("Island", 0.0, 0.0);
        graph.add_city(island.clone());

        let result = shortest_path(&graph, &a, &island).unwrap();
        assert!(!result.is_reachable());
        assert_eq!(result.distance_km, f64::INFINITY);
        assert_eq!(names(&result), vec!["Island"]);
    }

    #[test]
    fn test_unknown_city_is_not_found() {
        let (graph, a, _, _) = triangle();
        let result = shortest_path(&graph, &a, &City::new("Atlantis", 0.0, 0.0));
        assert!(matches!(result, Err(PlannerError::CityNotFound { .. })));
    }

    #[test]
    fn test_complete_graph_goes_direct() {
        let cities = vec![
            City::new("Victoria", 48.43, -123.37),
            City::new("Nanaimo", 49.17, -123.94),
            City::new("Tofino", 49.15, -125.91),
        ];
        let graph = Graph::complete(&cities);
        let result = shortest_path(&graph, &cities[0], &cities[2]).unwrap();

        assert_eq!(names(&result), vec!["Victoria", "Tofino"]);
        assert!((result.distance_km - cities[0].distance_to(&cities[2])).abs() < 1e-9);
    }
}
