//! Configuration types for wage projection.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the aggregate
//! [`ProjectionConfig`] consumed by the projection engine.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single contractual raise.
///
/// The `rate` is a multiplier applied to the then-current hourly rate,
/// so `1.09` is a 9% raise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaiseEvent {
    /// Calendar month the raise lands in (1-12).
    pub month: u32,
    /// Calendar year the raise lands in.
    pub year: i32,
    /// Multiplicative raise factor.
    pub rate: f64,
    /// Human-readable label, e.g. "9.0% First Year".
    pub description: String,
}

impl RaiseEvent {
    /// Creates a new raise event.
    pub fn new(month: u32, year: i32, rate: f64, description: impl Into<String>) -> Self {
        Self {
            month,
            year,
            rate,
            description: description.into(),
        }
    }

    /// Returns true if this event lands in the given calendar month.
    pub fn lands_in(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }
}

/// The ordered raise schedule for one proposal.
///
/// Events are searched in list order and the first match wins. Once the
/// explicit events run out, the post-contract fallback rate applies in the
/// anchor month of every year after [`Schedule::fallback_after_year`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Display name of the proposal (e.g., "Alliance").
    pub name: String,
    /// Optional free-text description of the proposal.
    #[serde(default)]
    pub description: String,
    /// Explicit raise events in lookup order.
    #[serde(default)]
    pub events: Vec<RaiseEvent>,
    /// Last calendar year covered by the contract. Defaults to the latest
    /// event year when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_end_year: Option<i32>,
}

impl Schedule {
    /// Creates a schedule from a name and its events.
    pub fn new(name: impl Into<String>, events: Vec<RaiseEvent>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            events,
            contract_end_year: None,
        }
    }

    /// Returns the first event landing in the given month, if any.
    pub fn event_for(&self, year: i32, month: u32) -> Option<&RaiseEvent> {
        self.events.iter().find(|e| e.lands_in(year, month))
    }

    /// The year after which post-contract raises begin.
    ///
    /// `None` means the schedule has no explicit coverage at all, so the
    /// fallback applies from the anchor month onwards.
    pub fn fallback_after_year(&self) -> Option<i32> {
        self.contract_end_year
            .or_else(|| self.events.iter().map(|e| e.year).max())
    }

    /// Returns (year, month) pairs that appear more than once.
    pub fn duplicate_periods(&self) -> Vec<(i32, u32)> {
        let mut duplicates = Vec::new();
        for (i, event) in self.events.iter().enumerate() {
            let seen_before = self.events[..i]
                .iter()
                .any(|e| e.lands_in(event.year, event.month));
            if seen_before && !duplicates.contains(&(event.year, event.month)) {
                duplicates.push((event.year, event.month));
            }
        }
        duplicates
    }

    /// Checks that every event can be applied by the engine.
    ///
    /// Duplicate periods are not an error; only the first one ever fires.
    pub fn validate(&self) -> EngineResult<()> {
        for event in &self.events {
            if !(1..=12).contains(&event.month) {
                return Err(EngineError::InvalidSchedule {
                    schedule: self.name.clone(),
                    message: format!("month {} is outside 1-12", event.month),
                });
            }
            if !event.rate.is_finite() || event.rate <= 0.0 {
                return Err(EngineError::InvalidSchedule {
                    schedule: self.name.clone(),
                    message: format!(
                        "rate {} for {}/{} must be a positive number",
                        event.rate, event.month, event.year
                    ),
                });
            }
        }
        Ok(())
    }
}

/// Settings for the optional narrative insights service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsSettings {
    /// Base URL of the text-generation API.
    #[serde(default = "default_insights_endpoint")]
    pub endpoint: String,
    /// Model identifier passed to the API.
    #[serde(default = "default_insights_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Upper bound on generated tokens.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for InsightsSettings {
    fn default() -> Self {
        Self {
            endpoint: default_insights_endpoint(),
            model: default_insights_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_insights_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_insights_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    300
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

/// Contents of `projection.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectionSettings {
    /// Human-readable name of the comparison.
    pub name: String,
    /// Calendar start of the simulation. Its month is the anchor month.
    pub anchor_date: NaiveDate,
    /// Annual multiplier applied after a schedule's explicit events.
    pub post_contract_rate: f64,
    /// Narrative insights settings.
    #[serde(default)]
    pub insights: InsightsSettings,
}

/// Everything the projection engine needs besides the per-call inputs.
///
/// # Example
///
/// ```
/// use wage_projection::config::ProjectionConfig;
///
/// let config = ProjectionConfig::reference();
/// assert_eq!(config.anchor_month(), 10);
/// assert_eq!(config.alliance.events.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Human-readable name of the comparison.
    pub name: String,
    /// Calendar start of the simulation.
    pub anchor_date: NaiveDate,
    /// Annual multiplier applied after the explicit schedules end.
    pub post_contract_rate: f64,
    /// The proposal whose earnings are compared against.
    pub alliance: Schedule,
    /// The proposal subtracted from the alliance figures.
    pub kp: Schedule,
}

impl ProjectionConfig {
    /// Creates a configuration from its component parts.
    pub fn new(
        name: impl Into<String>,
        anchor_date: NaiveDate,
        post_contract_rate: f64,
        alliance: Schedule,
        kp: Schedule,
    ) -> Self {
        Self {
            name: name.into(),
            anchor_date,
            post_contract_rate,
            alliance,
            kp,
        }
    }

    /// The recurring month in which post-contract raises apply.
    pub fn anchor_month(&self) -> u32 {
        self.anchor_date.month()
    }

    /// Validates both schedules and the fallback rate.
    pub fn validate(&self) -> EngineResult<()> {
        if !self.post_contract_rate.is_finite() || self.post_contract_rate <= 0.0 {
            return Err(EngineError::InvalidSchedule {
                schedule: self.name.clone(),
                message: format!(
                    "post-contract rate {} must be a positive number",
                    self.post_contract_rate
                ),
            });
        }
        self.alliance.validate()?;
        self.kp.validate()
    }
}
