//! Configuration management for the travel planner
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::PlannerError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the travel planner
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Detour suggestion thresholds
    #[serde(default)]
    pub detour: DetourConfig,
    /// Default planning settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty, compact or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Thresholds for the detour suggestion heuristic, as fractions of the
/// direct start-to-end distance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetourConfig {
    /// Largest accepted extra distance
    #[serde(default = "default_max_detour_ratio")]
    pub max_detour_ratio: f64,
    /// Largest accepted path deviation
    #[serde(default = "default_max_deviation_ratio")]
    pub max_deviation_ratio: f64,
    /// Cities closer than this to the start count as on the path
    #[serde(default = "default_near_endpoint_ratio")]
    pub near_endpoint_ratio: f64,
    /// Cities farther than this from the start count as on the path
    #[serde(default = "default_far_endpoint_ratio")]
    pub far_endpoint_ratio: f64,
    /// Number of suggestions kept
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

/// Default planning settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Close greedy tours by returning to the start city
    #[serde(default)]
    pub return_to_start: bool,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_max_detour_ratio() -> f64 {
    0.5
}

fn default_max_deviation_ratio() -> f64 {
    0.3
}

fn default_near_endpoint_ratio() -> f64 {
    0.1
}

fn default_far_endpoint_ratio() -> f64 {
    0.9
}

fn default_max_suggestions() -> usize {
    3
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DetourConfig {
    fn default() -> Self {
        Self {
            max_detour_ratio: default_max_detour_ratio(),
            max_deviation_ratio: default_max_deviation_ratio(),
            near_endpoint_ratio: default_near_endpoint_ratio(),
            far_endpoint_ratio: default_far_endpoint_ratio(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl PlannerConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVELPLANNER_LOGGING__LEVEL=debug
        builder = builder.add_source(
            Environment::with_prefix("TRAVELPLANNER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: PlannerConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-planner").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.detour.max_suggestions == 0 {
            self.detour.max_suggestions = default_max_suggestions();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_detour_ratios()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_detour_ratios(&self) -> Result<()> {
        let detour = &self.detour;

        for (name, value) in [
            ("max_detour_ratio", detour.max_detour_ratio),
            ("max_deviation_ratio", detour.max_deviation_ratio),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlannerError::config(format!(
                    "{name} must be a non-negative number, got: {value}"
                ))
                .into());
            }
        }

        if !(0.0..=1.0).contains(&detour.near_endpoint_ratio)
            || !(0.0..=1.0).contains(&detour.far_endpoint_ratio)
        {
            return Err(PlannerError::config(
                "Endpoint ratios must be between 0 and 1",
            )
            .into());
        }

        if detour.near_endpoint_ratio > detour.far_endpoint_ratio {
            return Err(PlannerError::config(
                "near_endpoint_ratio cannot exceed far_endpoint_ratio",
            )
            .into());
        }

        if detour.max_suggestions > 20 {
            return Err(PlannerError::config("Maximum suggestions cannot exceed 20").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "compact", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(PlannerError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
