//! Month-by-month compounding simulation.
//!
//! Both proposals start from the same hourly wage. Each month the raise (if
//! any) is applied first and that month's earnings are then accrued at the
//! raised rate, so a raise counts for the whole month it lands in.

use crate::config::ProjectionConfig;
use crate::models::ProjectionInputs;

use super::calendar::{MONTHS_PER_YEAR, YearMonth};
use super::raise_lookup::{RaiseApplication, find_raise};

/// The simulated state at the end of one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySample<'a> {
    /// Zero-based index from the anchor month.
    pub month_index: u32,
    /// The calendar month simulated.
    pub period: YearMonth,
    /// Alliance hourly rate after this month's raise.
    pub alliance_rate: f64,
    /// KP hourly rate after this month's raise.
    pub kp_rate: f64,
    /// Alliance earnings accrued through this month.
    pub cumulative_alliance: f64,
    /// KP earnings accrued through this month.
    pub cumulative_kp: f64,
    /// The Alliance raise applied this month, if any.
    pub alliance_raise: Option<RaiseApplication<'a>>,
    /// The KP raise applied this month, if any.
    pub kp_raise: Option<RaiseApplication<'a>>,
}

impl MonthlySample<'_> {
    /// Alliance minus KP cumulative earnings.
    pub fn cumulative_diff(&self) -> f64 {
        self.cumulative_alliance - self.cumulative_kp
    }
}

/// Number of simulated months for a horizon, anchor month included.
pub fn month_count(projection_years: u32) -> u32 {
    projection_years * MONTHS_PER_YEAR + 1
}

/// Runs the monthly simulation from the anchor month.
///
/// Produces `projection_years * 12 + 1` samples. A zero-year horizon still
/// simulates the anchor month.
///
/// # Example
///
/// ```
/// use wage_projection::calculation::simulate;
/// use wage_projection::config::ProjectionConfig;
/// use wage_projection::models::ProjectionInputs;
///
/// let config = ProjectionConfig::reference();
/// let samples = simulate(&ProjectionInputs::new(50.0, 40.0, 1), &config);
///
/// assert_eq!(samples.len(), 13);
/// assert_eq!(samples[0].alliance_rate, 50.0 * 1.09);
/// ```
pub fn simulate<'a>(
    inputs: &ProjectionInputs,
    config: &'a ProjectionConfig,
) -> Vec<MonthlySample<'a>> {
    let hours_per_month = inputs.hours_per_month();
    let anchor = YearMonth::from_date(config.anchor_date);
    let anchor_month = config.anchor_month();
    let total_months = month_count(inputs.projection_years);

    let mut alliance_rate = inputs.start_wage;
    let mut kp_rate = inputs.start_wage;
    let mut cumulative_alliance = 0.0;
    let mut cumulative_kp = 0.0;

    let mut samples = Vec::with_capacity(total_months as usize);

    for month_index in 0..total_months {
        let period = anchor.offset(month_index);

        let alliance_raise = find_raise(
            &config.alliance,
            period,
            anchor_month,
            config.post_contract_rate,
        );
        if let Some(raise) = &alliance_raise {
            alliance_rate = raise.apply(alliance_rate);
        }

        let kp_raise = find_raise(&config.kp, period, anchor_month, config.post_contract_rate);
        if let Some(raise) = &kp_raise {
            kp_rate = raise.apply(kp_rate);
        }

        cumulative_alliance += alliance_rate * hours_per_month;
        cumulative_kp += kp_rate * hours_per_month;

        samples.push(MonthlySample {
            month_index,
            period,
            alliance_rate,
            kp_rate,
            cumulative_alliance,
            cumulative_kp,
            alliance_raise,
            kp_raise,
        });
    }

    samples
}
