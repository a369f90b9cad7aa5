//! Error types for the planner library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// The species key is not in the profile table
    #[error("Unknown species '{key}'. Expected one of: {}", crate::species::Species::key_list())]
    InvalidSpecies { key: String },
    /// The date range is missing an endpoint or is inverted
    #[error("Invalid date range: {reason}")]
    InvalidDateRange { reason: String },
    /// The batch size is not a positive animal count
    #[error("Invalid quantity {quantity}: expected a whole number of animals, at least 1")]
    InvalidQuantity { quantity: i64 },
    /// Date arithmetic left the supported calendar
    #[error("Date out of range: {source}")]
    DateOutOfRange {
        #[source]
        source: jiff::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PlannerError {
    /// Creates an invalid date range error with the given reason.
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidDateRange {
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by the request itself.
    ///
    /// These are terminal for the invocation and require corrected input;
    /// everything else is an environment or arithmetic failure.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpecies { .. } | Self::InvalidDateRange { .. } | Self::InvalidQuantity { .. }
        )
    }
}

impl From<jiff::Error> for PlannerError {
    fn from(source: jiff::Error) -> Self {
        Self::DateOutOfRange { source }
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T> {
    /// Add context to any error type, converting to PlannerError.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| PlannerError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
