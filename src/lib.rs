//! Wage Projection Engine
//!
//! This crate compares two negotiated wage-raise proposals for a unionized
//! healthcare worker. It simulates both schedules month by month from the
//! contract anchor date, compounds each raise into the hourly rate, and
//! reports how far the cumulative earnings of the two proposals drift apart
//! over 4, 10, 20 and 30 year horizons.
//!
//! # Example
//!
//! ```
//! use wage_projection::calculation::calculate_reference_wage_impact;
//!
//! let result = calculate_reference_wage_impact(50.0, 40.0, 4);
//! assert_eq!(result.chart_data.len(), 17);
//! assert!(result.stats.loss_4_year > 0.0);
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod insights;
pub mod models;
