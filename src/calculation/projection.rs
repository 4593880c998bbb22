//! The wage projection entry point.
//!
//! [`calculate_wage_impact`] runs the monthly simulation, samples it every
//! quarter for charting, and derives the fixed-horizon loss statistics.

use tracing::debug;

use crate::config::ProjectionConfig;
use crate::models::{CalculationResult, ProjectionInputs, WageDataPoint};

use super::display::round_to_cents;
use super::simulation::{MonthlySample, simulate};
use super::stats::derive_stats;

/// Months between consecutive chart points.
pub const CHART_SAMPLE_INTERVAL: u32 = 3;

/// Projects Alliance and KP wages and their cumulative earnings gap.
///
/// This is a pure function of its arguments: identical inputs always give
/// identical results, and no input is rejected. Callers taking input from
/// outside the process should run [`ProjectionInputs::validate`] first.
///
/// # Example
///
/// ```
/// use wage_projection::calculation::calculate_wage_impact;
/// use wage_projection::config::ProjectionConfig;
/// use wage_projection::models::ProjectionInputs;
///
/// let config = ProjectionConfig::reference();
/// let result = calculate_wage_impact(&ProjectionInputs::new(50.0, 40.0, 4), &config);
///
/// assert_eq!(result.chart_data.len(), 17);
/// assert_eq!(result.chart_data[0].alliance_rate, 54.5);
/// assert_eq!(result.chart_data[0].kp_rate, 53.25);
/// assert!(result.stats.loss_4_year > 0.0);
/// assert_eq!(result.stats.loss_10_year, 0.0);
/// ```
pub fn calculate_wage_impact(
    inputs: &ProjectionInputs,
    config: &ProjectionConfig,
) -> CalculationResult {
    let samples = simulate(inputs, config);

    let chart_data: Vec<WageDataPoint> = samples
        .iter()
        .filter(|s| s.month_index % CHART_SAMPLE_INTERVAL == 0)
        .map(chart_point)
        .collect();

    let stats = derive_stats(&samples);

    debug!(
        start_wage = inputs.start_wage,
        weekly_hours = inputs.weekly_hours,
        projection_years = inputs.projection_years,
        months = samples.len(),
        chart_points = chart_data.len(),
        loss_4_year = stats.loss_4_year,
        "Wage projection calculated"
    );

    CalculationResult { chart_data, stats }
}

/// Runs [`calculate_wage_impact`] against the built-in reference schedules.
pub fn calculate_reference_wage_impact(
    start_wage: f64,
    weekly_hours: f64,
    projection_years: u32,
) -> CalculationResult {
    calculate_wage_impact(
        &ProjectionInputs::new(start_wage, weekly_hours, projection_years),
        &ProjectionConfig::reference(),
    )
}

fn chart_point(sample: &MonthlySample<'_>) -> WageDataPoint {
    WageDataPoint {
        date: sample.period.label(),
        display_date: sample.period.year,
        year: sample.period.year,
        month: sample.period.month,
        alliance_rate: round_to_cents(sample.alliance_rate),
        kp_rate: round_to_cents(sample.kp_rate),
        gap: round_to_cents(sample.alliance_rate - sample.kp_rate),
        cumulative_diff: sample.cumulative_diff(),
    }
}
