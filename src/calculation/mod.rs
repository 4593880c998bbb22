//! Calculation logic for the Wage Projection Engine.
//!
//! This module contains the month-by-month compounding simulation, the raise
//! lookup it relies on, quarterly chart sampling, fixed-horizon loss
//! statistics, display rounding and currency formatting, and the loss report
//! built on top of them.

mod calendar;
mod display;
mod projection;
mod raise_lookup;
mod report;
mod simulation;
mod stats;

pub use calendar::{MONTHS_PER_YEAR, YearMonth};
pub use display::{format_currency, round_half_away, round_to_cents};
pub use projection::{
    CHART_SAMPLE_INTERVAL, calculate_reference_wage_impact, calculate_wage_impact,
};
pub use raise_lookup::{RaiseApplication, find_raise};
pub use report::{build_milestones, build_raise_timeline, build_report, describe_assumptions};
pub use simulation::{MonthlySample, month_count, simulate};
pub use stats::{LOSS_HORIZONS, derive_stats, loss_at_year};
