use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use travel_planner::logging::init_logging;
use travel_planner::report::{render_json, render_text};
use travel_planner::{CityLoader, Graph, PlannerConfig, PlannerError, TravelPlanner};

#[derive(Parser)]
#[command(name = "travel-planner")]
#[command(about = "Plan greedy tours and point-to-point routes between cities")]
#[command(version)]
struct Cli {
    /// City file with `name,lat,lon` rows
    cities: PathBuf,

    /// Start city (defaults to the first city in the file)
    #[arg(long)]
    start: Option<String>,

    /// End city; plans a shortest route with suggested stops
    #[arg(long)]
    end: Option<String>,

    /// Return to the start city at the end of the tour
    #[arg(long = "return")]
    return_to_start: bool,

    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<PlannerError>() {
            Some(err) => eprintln!("Error: {}", err.user_message()),
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = PlannerConfig::load_from_path(cli.config.clone())?;
    init_logging(&config.logging, cli.verbose)?;
    debug!("Using configuration: {:?}", config);

    let cities = CityLoader::load_cities(&cli.cities)?;
    let graph = Graph::complete(&cities);

    let start = match &cli.start {
        Some(name) => graph.find(name)?,
        None => cities
            .first()
            .ok_or_else(|| PlannerError::validation("City file contains no cities"))?,
    };

    let planner = TravelPlanner::new(config.detour.clone());
    let result = match &cli.end {
        Some(name) => {
            let end = graph.find(name)?;
            planner.plan_route(&graph, start, end)?
        }
        None => {
            let return_to_start = cli.return_to_start || config.defaults.return_to_start;
            planner.plan_tour(&graph, start, &cities, return_to_start)?
        }
    };

    if cli.json {
        println!("{}", render_json(&result)?);
    } else {
        print!("{}", render_text(&result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_route_arguments() {
        let cli = Cli::try_parse_from([
            "travel-planner",
            "data/cities.csv",
            "--start",
            "Victoria",
            "--end",
            "Campbell River",
            "--return",
        ])
        .unwrap();

        assert_eq!(cli.start.as_deref(), Some("Victoria"));
        assert_eq!(cli.end.as_deref(), Some("Campbell River"));
        assert!(cli.return_to_start);
        assert!(!cli.json);
    }
}
