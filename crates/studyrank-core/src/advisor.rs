//! Schedule advisor backed by the Gemini `generateContent` API.
//!
//! The advisor never fails from the caller's point of view: a missing API key,
//! an empty schedule, or any transport/parse problem produces a fixed fallback
//! [`AnalysisResult`].

use std::time::Duration;

use indoc::formatdoc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::activity::Activity;
use crate::storage::AdvisorConfig;

const SYSTEM_INSTRUCTION: &str = "You are an academic advisor for a first-year university student. \
Provide a structured JSON response.";

/// Advisor's estimate of how overloaded the schedule is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurnoutRisk {
    Low,
    Medium,
    High,
}

/// Natural-language assessment of the current schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub tips: Vec<String>,
    pub burnout_risk: BurnoutRisk,
}

impl AnalysisResult {
    fn fallback(summary: &str, tips: &[&str]) -> Self {
        Self {
            summary: summary.to_string(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
            burnout_risk: BurnoutRisk::Low,
        }
    }

    /// Returned when no API key is configured.
    pub fn missing_key() -> Self {
        Self::fallback(
            "API Key is missing. Cannot generate analysis.",
            &["Please configure your API key to use AI features."],
        )
    }

    /// Returned when there is nothing to analyze.
    pub fn empty_schedule() -> Self {
        Self::fallback(
            "Your schedule is empty! Good time to relax or plan ahead.",
            &["Add some activities to get started."],
        )
    }

    /// Returned when the request or its response fails.
    pub fn unavailable() -> Self {
        Self::fallback(
            "Could not analyze schedule at this time.",
            &["Focus on your earliest deadline first.", "Take regular breaks."],
        )
    }
}

/// Internal failure modes; never surfaced past [`ScheduleAdvisor::analyze`].
#[derive(Error, Debug)]
enum AdvisorError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("advisor returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("no response from advisor")]
    EmptyResponse,

    #[error("malformed advisor response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One line per activity: name, type, date, time, duration and importance.
pub fn schedule_digest(activities: &[Activity]) -> String {
    activities
        .iter()
        .map(|a| {
            format!(
                "- {} ({}): {} at {} for {}mins. Importance: {}/10.",
                a.name,
                a.kind,
                a.date.format("%Y-%m-%d"),
                a.time.format("%H:%M"),
                a.duration_minutes,
                a.base_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_prompt(activities: &[Activity]) -> String {
    formatdoc! {"
        Analyze the following schedule:
        {digest}

        Determine:
        1. A brief 1-2 sentence summary of their current workload.
        2. 3 specific, actionable tips to handle the highest priority items or conflicts.
        3. Assessment of burnout risk (Low, Medium, High).
        ",
        digest = schedule_digest(activities),
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Client for the external schedule advisor.
pub struct ScheduleAdvisor {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl ScheduleAdvisor {
    /// Build an advisor from config, reading the key from `api_key_env`.
    pub fn from_config(config: &AdvisorConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        Self::new(config, api_key)
    }

    /// Build an advisor with an explicit key.
    pub fn new(config: &AdvisorConfig, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "advisor client builder failed, using defaults");
                Client::new()
            });

        Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Analyze the schedule. Always returns a result; failures become fallbacks.
    pub async fn analyze(&self, activities: &[Activity]) -> AnalysisResult {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::warn!("advisor API key missing");
            return AnalysisResult::missing_key();
        };

        if activities.is_empty() {
            return AnalysisResult::empty_schedule();
        }

        match self.request(api_key, activities).await {
            Ok(result) => {
                tracing::info!(risk = ?result.burnout_risk, tips = result.tips.len(), "advisor analysis received");
                result
            }
            Err(e) => {
                tracing::warn!(error = %e, "advisor analysis failed");
                AnalysisResult::unavailable()
            }
        }
    }

    async fn request(
        &self,
        api_key: &str,
        activities: &[Activity],
    ) -> Result<AnalysisResult, AdvisorError> {
        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": [{ "text": build_prompt(activities) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "summary": { "type": "STRING" },
                        "tips": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "burnoutRisk": { "type": "STRING", "enum": ["Low", "Medium", "High"] }
                    },
                    "required": ["summary", "tips", "burnoutRisk"]
                }
            }
        });

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        tracing::debug!(%url, count = activities.len(), "requesting schedule analysis");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(AdvisorError::Status(resp.status()));
        }

        let parsed: GenerateContentResponse = resp.json().await?;
        let text = parsed.text().ok_or(AdvisorError::EmptyResponse)?;
        Ok(serde_json::from_str(&text)?)
    }
}
