//! Prompt construction for narrative insights.

use serde::{Deserialize, Serialize};

use crate::calculation::round_half_away;
use crate::models::{CalculationStats, ProjectionInputs};

/// The figures the narrative is written about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightRequest {
    /// Current hourly wage in dollars.
    pub current_wage: f64,
    /// Hours worked per week.
    pub weekly_hours: f64,
    /// Cumulative loss at the end of the four-year contract.
    pub loss_4_year: f64,
    /// Cumulative loss over a thirty-year career.
    pub loss_30_year: f64,
}

impl InsightRequest {
    /// Takes the wage and hours from `inputs` and the losses from `stats`.
    pub fn from_projection(inputs: &ProjectionInputs, stats: &CalculationStats) -> Self {
        Self {
            current_wage: inputs.start_wage,
            weekly_hours: inputs.weekly_hours,
            loss_4_year: stats.loss_4_year,
            loss_30_year: stats.loss_30_year,
        }
    }
}

fn whole_dollars(value: f64) -> String {
    format!("{:.0}", round_half_away(value, 0))
}

/// Builds the prompt sent to the text-generation service.
///
/// # Example
///
/// ```
/// use wage_projection::insights::{InsightRequest, build_insight_prompt};
///
/// let prompt = build_insight_prompt(&InsightRequest {
///     current_wage: 50.0,
///     weekly_hours: 40.0,
///     loss_4_year: 12_345.5,
///     loss_30_year: 98_765.4,
/// });
/// assert!(prompt.contains("4-Year Contract Cumulative Loss: $12346"));
/// ```
pub fn build_insight_prompt(request: &InsightRequest) -> String {
    let loss_4 = whole_dollars(request.loss_4_year);
    let loss_30 = whole_dollars(request.loss_30_year);

    format!(
        "Context: A unionized healthcare worker is comparing two wage proposals (Alliance vs KP).\n\
         Data:\n\
         - Current Wage: ${wage}/hr\n\
         - Weekly Hours: {hours}\n\
         - 4-Year Contract Cumulative Loss: ${loss_4}\n\
         - 30-Year Career Cumulative Loss: ${loss_30}\n\
         \n\
         Task:\n\
         Provide a concise (3-4 bullet points), powerful strategic insight on why \"front-loading\" raises is critical.\n\
         Explain how the early ${loss_4} gap compounds into the massive ${loss_30} deficit.\n\
         Use persuasive but professional language suitable for a union communication tool.\n\
         Keep it brief and high-impact.",
        wage = request.current_wage,
        hours = request.weekly_hours,
    )
}
