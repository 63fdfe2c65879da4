//! Travel planner - route planning between cities on a great-circle graph
//!
//! This library provides graph construction over geographic points, a greedy
//! nearest-neighbor tour, Dijkstra shortest paths, and detour suggestions for
//! point-to-point journeys.

pub mod config;
pub mod error;
pub mod geo;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod models;
pub mod planner;
pub mod report;

// Re-export core types for public API
pub use config::{DetourConfig, PlannerConfig};
pub use error::PlannerError;
pub use graph::{CityId, Edge, Graph};
pub use loader::CityLoader;
pub use models::{City, RouteMode, RouteResult, Suggestion};
pub use planner::{ShortestPath, TravelPlanner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PlannerError>;
