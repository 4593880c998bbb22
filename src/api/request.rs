//! Request types for the Wage Projection API.
//!
//! `/calculate`, `/report` and `/insights` all take the same body.

use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_PROJECTION_YEARS, ProjectionInputs};

/// Request body for the projection endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRequest {
    /// Starting hourly wage in dollars.
    pub start_wage: f64,
    /// Hours worked per week.
    pub weekly_hours: f64,
    /// Projection horizon in years. Defaults to 30.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_years: Option<u32>,
}

impl From<ProjectionRequest> for ProjectionInputs {
    fn from(req: ProjectionRequest) -> Self {
        ProjectionInputs::new(
            req.start_wage,
            req.weekly_hours,
            req.projection_years.unwrap_or(DEFAULT_PROJECTION_YEARS),
        )
    }
}
