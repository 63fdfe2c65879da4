//! Undirected weighted city graph
//!
//! Cities live in an arena indexed by [`CityId`]; adjacency lists are kept
//! per id. The graph is built once and then only read.

use std::collections::HashMap;

use tracing::debug;

use crate::models::City;
use crate::{PlannerError, Result};

/// Index of a city inside a [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub usize);

/// Directed weighted link; undirected edges are stored once per direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: CityId,
    pub to: CityId,
    pub distance_km: f64,
}

#[derive(Debug, Default, Clone)]
pub struct Graph {
    cities: Vec<City>,
    index: HashMap<String, CityId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a complete graph with a great-circle edge between every pair.
    ///
    /// Duplicate names collapse onto the first occurrence.
    #[must_use]
    pub fn complete(cities: &[City]) -> Self {
        let mut graph = Self::new();
        for city in cities {
            graph.add_city(city.clone());
        }

        let count = graph.cities.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (a, b) = (&graph.cities[i], &graph.cities[j]);
                let distance = a.distance_to(b);
                graph.link(CityId(i), CityId(j), distance);
            }
        }

        debug!(
            "Built complete graph with {} cities and {} edges",
            count,
            count * count.saturating_sub(1) / 2
        );
        graph
    }

    /// Register a city; an already known city is left untouched
    pub fn add_city(&mut self, city: City) -> CityId {
        if let Some(&id) = self.index.get(city.key()) {
            return id;
        }
        let id = CityId(self.cities.len());
        self.index.insert(city.key().to_string(), id);
        self.cities.push(city);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add `a -> b` and `b -> a`, registering both cities first.
    ///
    /// Parallel edges are not deduplicated.
    pub fn add_undirected_edge(&mut self, a: &City, b: &City, distance_km: f64) {
        let a = self.add_city(a.clone());
        let b = self.add_city(b.clone());
        self.link(a, b, distance_km);
    }

    fn link(&mut self, a: CityId, b: CityId, distance_km: f64) {
        self.adjacency[a.0].push(Edge {
            from: a,
            to: b,
            distance_km,
        });
        self.adjacency[b.0].push(Edge {
            from: b,
            to: a,
            distance_km,
        });
    }

    /// Outgoing edges of a city, empty when the city is unknown
    #[must_use]
    pub fn neighbors(&self, city: &City) -> &[Edge] {
        match self.id_of(city) {
            Some(id) => self.edges_from(id),
            None => &[],
        }
    }

    /// Outgoing edges of a city by id
    #[must_use]
    pub fn edges_from(&self, id: CityId) -> &[Edge] {
        self.adjacency
            .get(id.0)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Shortest direct edge between two cities, if any
    #[must_use]
    pub fn edge_distance(&self, from: &City, to: &City) -> Option<f64> {
        let to = self.id_of(to)?;
        self.neighbors(from)
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.distance_km)
            .min_by(f64::total_cmp)
    }

    /// All registered cities in insertion order
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    #[must_use]
    pub fn city(&self, id: CityId) -> &City {
        &self.cities[id.0]
    }

    #[must_use]
    pub fn id_of(&self, city: &City) -> Option<CityId> {
        self.index.get(city.key()).copied()
    }

    /// Look up a city by name, ignoring case
    pub fn find(&self, name: &str) -> Result<&City> {
        self.index
            .get(&City::normalize(name))
            .map(|&id| self.city(id))
            .ok_or_else(|| PlannerError::city_not_found(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
