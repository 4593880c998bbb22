//! Built-in reference schedules for the 2025 Alliance and KP proposals.

use chrono::NaiveDate;

use super::types::{ProjectionConfig, RaiseEvent, Schedule};

/// Anchor of the reference comparison: October 2025.
pub const REFERENCE_ANCHOR: (i32, u32, u32) = (2025, 10, 1);

/// Projected 3% annual raise once both contracts have run out.
pub const REFERENCE_POST_CONTRACT_RATE: f64 = 1.03;

const ALLIANCE_EVENTS: [(u32, i32, f64, &str); 5] = [
    (10, 2025, 1.09, "9.0% First Year"),
    (10, 2026, 1.05, "5.0% Second Year"),
    (4, 2027, 1.03, "3.0% Mid-Term"),
    (10, 2027, 1.04, "4.0% Third Year"),
    (10, 2028, 1.04, "4.0% Final Year"),
];

const KP_EVENTS: [(u32, i32, f64, &str); 5] = [
    (10, 2025, 1.065, "6.5% Initial"),
    (10, 2026, 1.065, "6.5% Second"),
    (8, 2027, 1.03, "3.0% Retention"),
    (10, 2027, 1.025, "2.5% Third Year"),
    (10, 2028, 1.03, "3.0% Final Year"),
];

fn schedule_from(name: &str, description: &str, events: &[(u32, i32, f64, &str)]) -> Schedule {
    let mut schedule = Schedule::new(
        name,
        events
            .iter()
            .map(|&(month, year, rate, label)| RaiseEvent::new(month, year, rate, label))
            .collect(),
    );
    schedule.description = description.to_string();
    schedule
}

impl ProjectionConfig {
    /// The reference Alliance vs KP comparison anchored at October 2025.
    pub fn reference() -> Self {
        let (year, month, day) = REFERENCE_ANCHOR;
        let anchor_date = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();

        ProjectionConfig::new(
            "2025 Alliance vs KP proposal comparison",
            anchor_date,
            REFERENCE_POST_CONTRACT_RATE,
            schedule_from(
                "Alliance",
                "Front-loaded Alliance proposal",
                &ALLIANCE_EVENTS,
            ),
            schedule_from("KP", "KP proposal", &KP_EVENTS),
        )
    }
}
