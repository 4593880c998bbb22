//! Fixed-horizon cumulative loss statistics.

use crate::models::CalculationStats;

use super::calendar::MONTHS_PER_YEAR;
use super::simulation::MonthlySample;

/// Horizons, in years, reported in [`CalculationStats`].
pub const LOSS_HORIZONS: [u32; 4] = [4, 10, 20, 30];

/// Cumulative loss in the month before the `years` anniversary of the anchor.
///
/// Reads monthly index `years * 12 - 1`. Returns 0 when the simulation did
/// not reach that month or when `years` is 0.
pub fn loss_at_year(samples: &[MonthlySample<'_>], years: u32) -> f64 {
    let Some(target_index) = (years * MONTHS_PER_YEAR).checked_sub(1) else {
        return 0.0;
    };

    samples
        .get(target_index as usize)
        .map(MonthlySample::cumulative_diff)
        .unwrap_or(0.0)
}

/// Derives the 4/10/20/30-year loss statistics from a simulation.
pub fn derive_stats(samples: &[MonthlySample<'_>]) -> CalculationStats {
    let [four, ten, twenty, thirty] = LOSS_HORIZONS.map(|years| loss_at_year(samples, years));

    CalculationStats {
        loss_4_year: four,
        loss_10_year: ten,
        loss_20_year: twenty,
        loss_30_year: thirty,
    }
}
