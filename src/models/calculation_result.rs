//! Calculation result models for the Wage Projection Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures: the quarterly chart series and the fixed-horizon loss
//! statistics.

use serde::{Deserialize, Serialize};

/// One quarterly sample of the projection, ready for charting.
///
/// Rates and `gap` are rounded to cents for display. `cumulative_diff`
/// keeps full precision.
///
/// # Example
///
/// ```
/// use wage_projection::models::WageDataPoint;
///
/// let point = WageDataPoint {
///     date: "10/2025".to_string(),
///     display_date: 2025,
///     year: 2025,
///     month: 10,
///     alliance_rate: 54.5,
///     kp_rate: 53.25,
///     gap: 1.25,
///     cumulative_diff: 216.666_666_666_7,
/// };
/// assert_eq!(point.gap, point.alliance_rate - point.kp_rate);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageDataPoint {
    /// Label in `M/YYYY` form.
    pub date: String,
    /// Year used for the chart axis.
    pub display_date: i32,
    /// Calendar year of the sample.
    pub year: i32,
    /// Calendar month of the sample (1-12).
    pub month: u32,
    /// Alliance hourly rate, rounded to cents.
    pub alliance_rate: f64,
    /// KP hourly rate, rounded to cents.
    pub kp_rate: f64,
    /// Alliance minus KP hourly rate, rounded to cents.
    pub gap: f64,
    /// Alliance minus KP cumulative earnings.
    pub cumulative_diff: f64,
}

/// Cumulative earnings lost under the KP proposal at fixed horizons.
///
/// Each figure is Alliance minus KP cumulative earnings at the month just
/// before the N-year anniversary of the anchor. Horizons beyond the
/// projection are reported as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationStats {
    /// Loss at the end of the four-year contract.
    pub loss_4_year: f64,
    /// Loss after ten years.
    pub loss_10_year: f64,
    /// Loss after twenty years.
    pub loss_20_year: f64,
    /// Loss after thirty years.
    pub loss_30_year: f64,
}

impl CalculationStats {
    /// Returns `(years, loss)` pairs in ascending horizon order.
    pub fn by_horizon(&self) -> [(u32, f64); 4] {
        [
            (4, self.loss_4_year),
            (10, self.loss_10_year),
            (20, self.loss_20_year),
            (30, self.loss_30_year),
        ]
    }
}

/// The complete output of one projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Quarterly samples starting at the anchor month.
    pub chart_data: Vec<WageDataPoint>,
    /// Fixed-horizon loss statistics.
    pub stats: CalculationStats,
}
