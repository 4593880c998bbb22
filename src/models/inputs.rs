//! Projection input models.
//!
//! This module contains [`ProjectionInputs`], the three scalars a caller
//! supplies per calculation, and [`InputRanges`], the bounds the
//! presentation layer offers on its controls.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default projection horizon in years.
pub const DEFAULT_PROJECTION_YEARS: u32 = 30;

/// Longest horizon the API will accept.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Per-call inputs to the projection engine.
///
/// The engine accepts any values; [`ProjectionInputs::validate`] is for
/// callers that take input from outside the process.
///
/// # Example
///
/// ```
/// use wage_projection::models::ProjectionInputs;
///
/// let inputs = ProjectionInputs::new(50.0, 40.0, 4);
/// assert!(inputs.validate().is_ok());
/// assert_eq!(inputs.hours_per_year(), 2080.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInputs {
    /// Starting hourly wage in dollars.
    pub start_wage: f64,
    /// Hours worked per week.
    pub weekly_hours: f64,
    /// Number of years to project past the anchor month.
    #[serde(default = "default_projection_years")]
    pub projection_years: u32,
}

fn default_projection_years() -> u32 {
    DEFAULT_PROJECTION_YEARS
}

impl ProjectionInputs {
    /// Creates a new set of inputs.
    pub fn new(start_wage: f64, weekly_hours: f64, projection_years: u32) -> Self {
        Self {
            start_wage,
            weekly_hours,
            projection_years,
        }
    }

    /// Paid hours per year, assuming 52 working weeks.
    pub fn hours_per_year(&self) -> f64 {
        self.weekly_hours * 52.0
    }

    /// Paid hours per month, `(weekly_hours * 52) / 12`.
    pub fn hours_per_month(&self) -> f64 {
        self.hours_per_year() / 12.0
    }

    /// Rejects inputs that would produce meaningless projections.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.start_wage.is_finite() || self.start_wage <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: "start_wage".to_string(),
                message: "must be a finite number greater than zero".to_string(),
            });
        }
        if !self.weekly_hours.is_finite() || self.weekly_hours <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: "weekly_hours".to_string(),
                message: "must be a finite number greater than zero".to_string(),
            });
        }
        if self.projection_years > MAX_PROJECTION_YEARS {
            return Err(EngineError::InvalidInput {
                field: "projection_years".to_string(),
                message: format!("must not exceed {}", MAX_PROJECTION_YEARS),
            });
        }
        Ok(())
    }
}

impl Default for ProjectionInputs {
    fn default() -> Self {
        let ranges = InputRanges::default();
        Self::new(
            ranges.wage.default,
            ranges.weekly_hours.default,
            DEFAULT_PROJECTION_YEARS,
        )
    }
}

/// A slider range offered to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRange {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Increment between selectable values.
    pub step: f64,
    /// Initially selected value.
    pub default: f64,
}

impl InputRange {
    /// Returns true if `value` lies within `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Documented control ranges for the comparison tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRanges {
    /// Hourly wage slider: $40-$70 in $0.50 steps.
    pub wage: InputRange,
    /// Weekly hours slider: 20-40 in steps of 4.
    pub weekly_hours: InputRange,
    /// Horizon used when a caller does not choose one.
    pub default_projection_years: u32,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            wage: InputRange {
                min: 40.0,
                max: 70.0,
                step: 0.5,
                default: 50.0,
            },
            weekly_hours: InputRange {
                min: 20.0,
                max: 40.0,
                step: 4.0,
                default: 40.0,
            },
            default_projection_years: DEFAULT_PROJECTION_YEARS,
        }
    }
}
