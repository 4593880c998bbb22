//! HTTP client for the text-generation service.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::InsightsSettings;
use crate::error::{EngineError, EngineResult};

use super::prompt::{InsightRequest, build_insight_prompt};

/// Returned when the service answers but produces no text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "Unable to generate insights at this time.";

/// Returned whenever the service cannot be reached or fails.
pub const FALLBACK_MESSAGE: &str = "The AI analysis is currently unavailable. Focus on the \
     'Snowball Effect' of front-loaded raises depicted in the charts.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        if text.trim().is_empty() { None } else { Some(text) }
    }
}

/// Client for a Gemini-style `generateContent` endpoint.
///
/// The client is cheap to clone and safe to share between requests. Every
/// call is bounded by the configured timeout and is cancelled when its
/// future is dropped.
#[derive(Debug, Clone)]
pub struct InsightsClient {
    http: Client,
    settings: InsightsSettings,
    api_key: Option<String>,
}

impl InsightsClient {
    /// Builds a client, reading the API key from the configured environment
    /// variable. A missing key is not an error; calls will fall back.
    pub fn from_env(settings: InsightsSettings) -> EngineResult<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::new(settings, api_key)
    }

    /// Builds a client with an explicit API key.
    pub fn new(settings: InsightsSettings, api_key: Option<String>) -> EngineResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("wage-projection/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| EngineError::InsightsUnavailable {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            http,
            settings,
            api_key,
        })
    }

    /// Returns true if an API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }

    /// Sends `prompt` to the service.
    ///
    /// Returns `Ok(None)` when the service answers without any text.
    pub async fn generate(&self, prompt: &str) -> EngineResult<Option<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| EngineError::InsightsUnavailable {
                message: format!("{} is not set", self.settings.api_key_env),
            })?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
            },
        };

        let url = self.url();
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EngineError::InsightsUnavailable {
                message: format!("request to {} failed: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let preview: String = response
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(180)
                .collect();
            return Err(EngineError::InsightsUnavailable {
                message: format!("{} returned {}: {}", url, status, preview),
            });
        }

        let parsed: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| EngineError::InsightsUnavailable {
                    message: format!("invalid response from {}: {}", url, e),
                })?;

        Ok(parsed.text())
    }
}

/// Produces narrative commentary for a projection. Never fails.
///
/// An empty answer yields [`EMPTY_RESPONSE_MESSAGE`]; any error yields
/// [`FALLBACK_MESSAGE`].
pub async fn get_insights(client: &InsightsClient, request: &InsightRequest) -> String {
    let prompt = build_insight_prompt(request);

    match client.generate(&prompt).await {
        Ok(Some(text)) => {
            debug!(chars = text.len(), "Generated insights");
            text
        }
        Ok(None) => EMPTY_RESPONSE_MESSAGE.to_string(),
        Err(err) => {
            warn!(error = %err, "Insight generation failed; using fallback message");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
