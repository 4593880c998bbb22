//! Loss report models.
//!
//! The report wraps a [`CalculationStats`] in presentation-ready form: a
//! milestone table with formatted currency, the timeline of every raise the
//! simulation applied, and the assumptions behind the figures.

use serde::{Deserialize, Serialize};

use super::{CalculationStats, ProjectionInputs};

/// Which proposal a raise belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proposal {
    /// The Alliance proposal.
    Alliance,
    /// The KP proposal.
    Kp,
}

/// Why a raise was applied in a given month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaiseSource {
    /// An explicit event from the proposal's schedule.
    Scheduled,
    /// The annual fallback once the contract has ended.
    PostContract,
}

/// A raise the simulation applied, in the order it was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaiseRecord {
    /// Zero-based month index from the anchor.
    pub month_index: u32,
    /// Label in `M/YYYY` form.
    pub date: String,
    /// The proposal whose rate changed.
    pub proposal: Proposal,
    /// Scheduled event or post-contract fallback.
    pub source: RaiseSource,
    /// Multiplier applied to the previous rate.
    pub multiplier: f64,
    /// Event description, or a generated one for fallback raises.
    pub description: String,
    /// Hourly rate after the raise, full precision.
    pub resulting_rate: f64,
}

/// One row of the "snowball" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossMilestone {
    /// Horizon in years.
    pub years: u32,
    /// Row label, e.g. "End of Contract (4 Years)".
    pub label: String,
    /// Cumulative loss at the horizon.
    pub loss: f64,
    /// `loss` formatted as whole dollars.
    pub formatted_loss: String,
    /// A concrete comparison for the size of the loss.
    pub comparison: String,
}

/// Presentation-ready summary of one projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    /// The inputs the projection ran with.
    pub inputs: ProjectionInputs,
    /// Paid hours per year used for the projection.
    pub hours_per_year: f64,
    /// Raw loss statistics.
    pub stats: CalculationStats,
    /// Milestone rows in ascending horizon order.
    pub milestones: Vec<LossMilestone>,
    /// Every raise applied, in simulation order.
    pub raise_timeline: Vec<RaiseRecord>,
    /// Plain-language statement of the projection assumptions.
    pub assumptions: String,
    /// The version of the engine that produced the report.
    pub engine_version: String,
}
