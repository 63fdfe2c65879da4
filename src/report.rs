//! Text and JSON rendering of planning results

use crate::models::RouteResult;
use crate::{PlannerError, Result};

/// Render a result the way the command-line tool prints it
#[must_use]
pub fn render_text(result: &RouteResult) -> String {
    let mut out = String::new();

    if result.is_intelligent_route() {
        out.push_str("=== DIJKSTRA TRAVEL PLANNER ===\n");
        out.push_str(&result.description);
        out.push_str("\n\nRecommended route:\n");
    } else {
        out.push_str("Greedy route (visiting all cities):\n");
    }

    out.push_str(&result.route_names().join(" -> "));
    out.push('\n');
    out.push_str(&format!("Total distance: {:.2} km\n", result.total_distance_km));

    if !result.suggestions.is_empty() {
        out.push_str("\nCities you can visit along the way:\n");
        for suggestion in &result.suggestions {
            out.push_str(&format!(
                "- {} (adds {:.1} km to your journey)\n",
                suggestion.city.name, suggestion.detour_km
            ));
        }
    }

    out
}

/// Pretty-printed JSON form of a result
pub fn render_json(result: &RouteResult) -> Result<String> {
    serde_json::to_string_pretty(result)
        .map_err(|e| PlannerError::general(format!("Failed to serialize route: {e}")))
}
