//! Calendar month arithmetic.
//!
//! The simulation only cares about (year, month) pairs, so day-of-month is
//! dropped as soon as the anchor date is read.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Number of months in a calendar year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// A calendar month.
///
/// # Example
///
/// ```
/// use wage_projection::calculation::YearMonth;
/// use chrono::NaiveDate;
///
/// let anchor = YearMonth::from_date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
/// assert_eq!(anchor.offset(3), YearMonth::new(2026, 1));
/// assert_eq!(anchor.offset(3).label(), "1/2026");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

impl YearMonth {
    /// Creates a new year/month pair.
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// The month `months` calendar months after this one.
    pub fn offset(self, months: u32) -> Self {
        let total = i64::from(self.year) * i64::from(MONTHS_PER_YEAR)
            + i64::from(self.month) - 1
            + i64::from(months);
        let months_per_year = i64::from(MONTHS_PER_YEAR);
        Self {
            year: total.div_euclid(months_per_year) as i32,
            month: (total.rem_euclid(months_per_year) + 1) as u32,
        }
    }

    /// Chart label in `M/YYYY` form, without zero padding.
    pub fn label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }
}
