//! Error types for the Wage Projection Engine.
//!
//! The projection engine itself is total and never fails. Errors only arise
//! around it: loading schedule configuration, validating API input, and
//! talking to the narrative insights service.

use thiserror::Error;

/// The main error type for the Wage Projection Engine.
///
/// # Example
///
/// ```
/// use wage_projection::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/projection.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/projection.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A raise schedule contained an event the engine cannot apply.
    #[error("Invalid schedule '{schedule}': {message}")]
    InvalidSchedule {
        /// The name of the offending schedule.
        schedule: String,
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// Projection input was outside the accepted domain.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The narrative text service could not produce insights.
    #[error("Insights unavailable: {message}")]
    InsightsUnavailable {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
