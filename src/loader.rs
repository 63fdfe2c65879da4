//! City file loading
//!
//! Reads `name,lat,lon` records. Blank lines, lines whose first non-blank
//! character is `#` and rows with fewer than three fields are skipped.
//! Quotes have no special meaning.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::models::City;
use crate::{PlannerError, Result};

/// Loader for delimited city files
pub struct CityLoader;

impl CityLoader {
    /// Load and parse a city file
    pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<Vec<City>> {
        let path = path.as_ref();
        info!("Loading cities from: {:?}", path);

        if !path.exists() {
            return Err(PlannerError::FileNotFound {
                path: path.to_string_lossy().to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse city records, keeping file order
    pub fn parse(content: &str) -> Result<Vec<City>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(content.as_bytes());

        let mut cities = Vec::new();
        let mut skipped = 0;

        for record in reader.records() {
            let record = record.map_err(|e| PlannerError::parse(format!("Invalid record: {e}")))?;
            let line = record.position().map_or(0, csv::Position::line);

            if record.get(0).is_some_and(|field| field.starts_with('#')) {
                continue;
            }

            if record.len() < 3 {
                skipped += 1;
                continue;
            }

            cities.push(Self::parse_record(&record, line)?);
        }

        if skipped > 0 {
            warn!("Skipped {} rows with fewer than three fields", skipped);
        }
        debug!("Parsed {} cities", cities.len());

        Ok(cities)
    }

    fn parse_record(record: &StringRecord, line: u64) -> Result<City> {
        let name = &record[0];
        if name.is_empty() {
            return Err(PlannerError::parse(format!("Line {line}: city name is empty")));
        }

        let latitude = Self::parse_coordinate(&record[1], "latitude", line)?;
        let longitude = Self::parse_coordinate(&record[2], "longitude", line)?;

        Ok(City::new(name, latitude, longitude))
    }

    fn parse_coordinate(value: &str, field: &str, line: u64) -> Result<f64> {
        value
            .parse::<f64>()
            .map_err(|e| PlannerError::parse(format!("Line {line}: invalid {field} '{value}': {e}")))
    }
}
