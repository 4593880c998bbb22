//! Optional narrative commentary from an external text-generation service.
//!
//! Nothing here can affect a projection: [`get_insights`] runs after the
//! engine, catches every failure, and substitutes a static message.

mod client;
mod prompt;

pub use client::{EMPTY_RESPONSE_MESSAGE, FALLBACK_MESSAGE, InsightsClient, get_insights};
pub use prompt::{InsightRequest, build_insight_prompt};
