//! Core data models for the Wage Projection Engine.
//!
//! This module contains the per-call inputs, the engine's result types, and
//! the presentation-ready report types.

mod calculation_result;
mod inputs;
mod report;

pub use calculation_result::{CalculationResult, CalculationStats, WageDataPoint};
pub use inputs::{
    DEFAULT_PROJECTION_YEARS, InputRange, InputRanges, MAX_PROJECTION_YEARS, ProjectionInputs,
};
pub use report::{LossMilestone, ProjectionReport, Proposal, RaiseRecord, RaiseSource};
