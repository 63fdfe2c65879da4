//! Error types and handling for the travel planner

use thiserror::Error;

/// Main error type for the travel planner
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The greedy tour found no finite-distance candidate from the current city
    #[error("No reachable next city from {from}")]
    UnreachableCity { from: String },

    /// A requested city name does not match any loaded city
    #[error("City not found: {name}")]
    CityNotFound { name: String },

    /// The destination was never reached by the shortest-path search
    #[error("No path exists from {from} to {to}")]
    NoPathExists { from: String, to: String },

    /// City file parsing errors
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Input file does not exist
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl PlannerError {
    /// Create a new unreachable-next-city error
    pub fn unreachable<S: Into<String>>(from: S) -> Self {
        Self::UnreachableCity { from: from.into() }
    }

    /// Create a new city-not-found error
    pub fn city_not_found<S: Into<String>>(name: S) -> Self {
        Self::CityNotFound { name: name.into() }
    }

    /// Create a new no-path error
    pub fn no_path<S: Into<String>, T: Into<String>>(from: S, to: T) -> Self {
        Self::NoPathExists {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::UnreachableCity { from } => {
                format!("Cannot continue the tour: no city is reachable from {from}.")
            }
            PlannerError::CityNotFound { name } => {
                format!("City not found: {name}. Check the spelling against the city file.")
            }
            PlannerError::NoPathExists { from, to } => {
                format!("There is no route from {from} to {to}.")
            }
            PlannerError::Parse { message } => format!("Could not read city file: {message}"),
            PlannerError::FileNotFound { path } => format!("City file not found: {path}"),
            PlannerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            PlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            PlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            PlannerError::General { message } => message.clone(),
        }
    }
}
