//! Data models for the travel planner
//!
//! This module contains the core domain models organized by concern:
//! - City: Named geographic point with case-insensitive identity
//! - Route: Planning results and suggested stops

pub mod city;
pub mod route;

// Re-export all public types for convenient access
pub use city::City;
pub use route::{RouteMode, RouteResult, Suggestion};
