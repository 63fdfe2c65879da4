//! Integration tests for the travel planner library and CLI

use std::process::Command;

use travel_planner::{City, CityLoader, Graph, PlannerError, TravelPlanner, geo};

const CITIES: &str = "data/cities.csv";

fn planner_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_travel-planner"))
}

fn island() -> Vec<City> {
    vec![
        City::new("Victoria", 48.43, -123.37),
        City::new("Nanaimo", 49.17, -123.94),
        City::new("Tofino", 49.15, -125.91),
    ]
}

/// Victoria to Tofino passes Nanaimo as a suggested stop
#[test]
fn test_victoria_to_tofino_scenario() {
    let cities = island();
    let graph = Graph::complete(&cities);
    let start = graph.find("victoria").unwrap();
    let end = graph.find("TOFINO").unwrap();

    let result = TravelPlanner::default().plan_route(&graph, start, end).unwrap();

    assert_eq!(result.route.first(), Some(start));
    assert_eq!(result.route.last(), Some(end));
    let direct = geo::distance_km(48.43, -123.37, 49.15, -125.91);
    assert!(result.total_distance_km >= direct);
    assert!(result.suggested_cities().any(|c| c.name == "Nanaimo"));
}

/// Greedy tour over the sample file visits every city once
#[test]
fn test_tour_over_sample_file() {
    let cities = CityLoader::load_cities(CITIES).unwrap();
    let graph = Graph::complete(&cities);

    let result = TravelPlanner::default()
        .plan_tour(&graph, &cities[0], &cities, true)
        .unwrap();

    assert_eq!(result.route.len(), cities.len() + 1);
    assert_eq!(result.route.first(), result.route.last());
    for city in &cities {
        let visits = result.route[..cities.len()].iter().filter(|c| *c == city).count();
        assert_eq!(visits, 1, "{} visited {} times", city.name, visits);
    }
}

/// Unknown city names surface as lookup errors
#[test]
fn test_unknown_city_lookup() {
    let graph = Graph::complete(&island());
    assert!(matches!(
        graph.find("Atlantis"),
        Err(PlannerError::CityNotFound { .. })
    ));
}

/// Tour mode prints the greedy route
#[test]
fn test_cli_tour() {
    let output = planner_bin()
        .args([CITIES, "--return"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Greedy route (visiting all cities):\nVictoria -> "));
    assert!(stdout.contains(" -> Victoria\n"));
    assert!(stdout.contains("Total distance:"));
}

/// Route mode prints description and suggestions
#[test]
fn test_cli_route() {
    let output = planner_bin()
        .args([CITIES, "--start", "victoria", "--end", "Tofino"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== DIJKSTRA TRAVEL PLANNER ==="));
    assert!(stdout.contains("Travel from Victoria to Tofino:"));
    assert!(stdout.contains("Recommended route:\nVictoria -> "));
    assert!(stdout.contains("Cities you can visit along the way:"));
}

/// JSON output is machine readable
#[test]
fn test_cli_json_output() {
    let output = planner_bin()
        .args([CITIES, "--start", "Nanaimo", "--end", "Campbell River", "--json"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["mode"], "intelligent");
    assert_eq!(value["route"][0]["name"], "Nanaimo");
}

/// Unknown start city fails with a readable message
#[test]
fn test_cli_unknown_city() {
    let output = planner_bin()
        .args([CITIES, "--start", "Atlantis"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("City not found: Atlantis"));
}

/// Missing city file is reported
#[test]
fn test_cli_missing_file() {
    let output = planner_bin()
        .arg("no_such_cities.csv")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("City file not found"));
}

/// Custom config file option
#[test]
fn test_custom_config_option() {
    let output = planner_bin()
        .args([CITIES, "--config", "config/default.toml", "--start", "Duncan"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Duncan -> "));
}
