//! Raise lookup for a single proposal and month.
//!
//! An ordered search over the schedule's events, followed by a guarded
//! post-contract fallback check.

use crate::config::{RaiseEvent, Schedule};
use crate::models::RaiseSource;

use super::calendar::YearMonth;

/// A raise that lands in a given month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RaiseApplication<'a> {
    /// The first explicit event matching the month.
    Scheduled(&'a RaiseEvent),
    /// The annual fallback, carrying its multiplier.
    PostContract(f64),
}

impl RaiseApplication<'_> {
    /// The multiplier applied to the running rate.
    pub fn multiplier(&self) -> f64 {
        match self {
            RaiseApplication::Scheduled(event) => event.rate,
            RaiseApplication::PostContract(rate) => *rate,
        }
    }

    /// Returns the raised rate.
    pub fn apply(&self, rate: f64) -> f64 {
        rate * self.multiplier()
    }

    /// Scheduled or post-contract.
    pub fn source(&self) -> RaiseSource {
        match self {
            RaiseApplication::Scheduled(_) => RaiseSource::Scheduled,
            RaiseApplication::PostContract(_) => RaiseSource::PostContract,
        }
    }

    /// Description suitable for a raise timeline.
    pub fn description(&self) -> String {
        match self {
            RaiseApplication::Scheduled(event) => event.description.clone(),
            RaiseApplication::PostContract(rate) => {
                format!("{:.1}% Post-Contract", (rate - 1.0) * 100.0)
            }
        }
    }
}

/// Finds the raise, if any, that applies to `schedule` in `period`.
///
/// The first explicit event landing in `period` wins; later duplicates are
/// ignored. Otherwise the post-contract rate applies when `period` is in the
/// anchor month of a year strictly after the schedule's fallback threshold.
///
/// # Example
///
/// ```
/// use wage_projection::calculation::{find_raise, YearMonth};
/// use wage_projection::config::ProjectionConfig;
///
/// let config = ProjectionConfig::reference();
/// let raise = find_raise(&config.alliance, YearMonth::new(2029, 10), 10, 1.03);
/// assert_eq!(raise.map(|r| r.multiplier()), Some(1.03));
///
/// let none = find_raise(&config.alliance, YearMonth::new(2029, 11), 10, 1.03);
/// assert!(none.is_none());
/// ```
pub fn find_raise(
    schedule: &Schedule,
    period: YearMonth,
    anchor_month: u32,
    post_contract_rate: f64,
) -> Option<RaiseApplication<'_>> {
    if let Some(event) = schedule.event_for(period.year, period.month) {
        return Some(RaiseApplication::Scheduled(event));
    }

    let contract_over = schedule
        .fallback_after_year()
        .is_none_or(|end_year| period.year > end_year);

    if period.month == anchor_month && contract_over {
        Some(RaiseApplication::PostContract(post_contract_rate))
    } else {
        None
    }
}
