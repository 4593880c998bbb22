//! Loss report construction.
//!
//! Builds the milestone table, raise timeline and assumptions text shown
//! alongside the chart.

use crate::config::ProjectionConfig;
use crate::models::{
    CalculationStats, LossMilestone, ProjectionInputs, ProjectionReport, Proposal, RaiseRecord,
};

use super::display::format_currency;
use super::raise_lookup::RaiseApplication;
use super::simulation::{MonthlySample, simulate};
use super::stats::derive_stats;

/// Builds the full report for one projection.
///
/// # Example
///
/// ```
/// use wage_projection::calculation::build_report;
/// use wage_projection::config::ProjectionConfig;
/// use wage_projection::models::ProjectionInputs;
///
/// let report = build_report(&ProjectionInputs::new(50.0, 40.0, 30), &ProjectionConfig::reference());
/// assert_eq!(report.milestones.len(), 4);
/// assert_eq!(report.milestones[0].label, "End of Contract (4 Years)");
/// assert_eq!(report.hours_per_year, 2080.0);
/// ```
pub fn build_report(inputs: &ProjectionInputs, config: &ProjectionConfig) -> ProjectionReport {
    let samples = simulate(inputs, config);
    let stats = derive_stats(&samples);

    ProjectionReport {
        inputs: *inputs,
        hours_per_year: inputs.hours_per_year(),
        stats,
        milestones: build_milestones(&stats),
        raise_timeline: build_raise_timeline(&samples),
        assumptions: describe_assumptions(inputs, config),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Converts loss statistics into labelled, formatted table rows.
pub fn build_milestones(stats: &CalculationStats) -> Vec<LossMilestone> {
    stats
        .by_horizon()
        .into_iter()
        .map(|(years, loss)| {
            let (label, comparison) = milestone_text(years);
            LossMilestone {
                years,
                label,
                loss,
                formatted_loss: format_currency(loss),
                comparison: comparison.to_string(),
            }
        })
        .collect()
}

fn milestone_text(years: u32) -> (String, &'static str) {
    match years {
        4 => (
            "End of Contract (4 Years)".to_string(),
            "A nice family vacation or major appliance upgrades",
        ),
        10 => (
            "10 Years".to_string(),
            "A reliable used car or significant down payment",
        ),
        20 => (
            "20 Years".to_string(),
            "A year of college tuition or major home renovation",
        ),
        30 => (
            "30 Years (Career)".to_string(),
            "Significant impact on retirement savings",
        ),
        other => (format!("{} Years", other), "Lost earnings that never come back"),
    }
}

/// Lists every raise the simulation applied, Alliance before KP within a month.
pub fn build_raise_timeline(samples: &[MonthlySample<'_>]) -> Vec<RaiseRecord> {
    let mut timeline = Vec::new();

    for sample in samples {
        let applied = [
            (Proposal::Alliance, sample.alliance_raise, sample.alliance_rate),
            (Proposal::Kp, sample.kp_raise, sample.kp_rate),
        ];

        for (proposal, raise, resulting_rate) in applied {
            if let Some(raise) = raise {
                timeline.push(raise_record(sample, proposal, &raise, resulting_rate));
            }
        }
    }

    timeline
}

fn raise_record(
    sample: &MonthlySample<'_>,
    proposal: Proposal,
    raise: &RaiseApplication<'_>,
    resulting_rate: f64,
) -> RaiseRecord {
    RaiseRecord {
        month_index: sample.month_index,
        date: sample.period.label(),
        proposal,
        source: raise.source(),
        multiplier: raise.multiplier(),
        description: raise.description(),
        resulting_rate,
    }
}

/// The footnote stating what the projection assumes.
pub fn describe_assumptions(inputs: &ProjectionInputs, config: &ProjectionConfig) -> String {
    let fallback_percent = (config.post_contract_rate - 1.0) * 100.0;
    format!(
        "Assumptions: Employment based on {} hours/week ({} hours/year). \
         Projections assume a standard {:.1}% annual raise each {} after the initial \
         contract period for both scenarios. Taxes not included.",
        inputs.weekly_hours,
        inputs.hours_per_year(),
        fallback_percent,
        month_name(config.anchor_month()),
    )
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
