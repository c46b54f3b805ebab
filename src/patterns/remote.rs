// Historical pattern analysis via the generation endpoint.
//
// The model sees the alert window as JSON plus a timeframe and returns a
// summary object. Any failure falls back to the local frequency summary.

use std::sync::Arc;

use clap::ValueEnum;
use serde_json::Value;
use tracing::warn;

use super::local::PatternAnalyzer;
use crate::generation::json::{extract_json_object, string, string_list};
use crate::generation::traits::{FetchError, GenerationRequest, TextGenerator};
use crate::models::{MonitoringAlert, PatternSummary, RiskLevel};

const PATTERNS_MAX_TOKENS: u32 = 500;
const PATTERNS_TEMPERATURE: f32 = 0.3;

/// Window the model is asked to reason about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Timeframe {
    Day,
    #[default]
    Week,
    Month,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Day => "day",
            Timeframe::Week => "week",
            Timeframe::Month => "month",
        }
    }
}

pub struct RemotePatternAnalyzer {
    generator: Arc<dyn TextGenerator>,
    model: String,
    local: PatternAnalyzer,
}

impl RemotePatternAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            local: PatternAnalyzer,
        }
    }

    /// Remote summary, else the local one, else the empty summary.
    pub async fn summarize(&self, alerts: &[MonitoringAlert], timeframe: Timeframe) -> PatternSummary {
        match self.fetch_patterns(alerts, timeframe).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, timeframe = timeframe.as_str(), "Using local pattern summary");
                self.local
                    .summarize(alerts)
                    .unwrap_or_else(PatternSummary::empty)
            }
        }
    }

    /// An empty window returns the empty summary without a network call.
    pub async fn fetch_patterns(
        &self,
        alerts: &[MonitoringAlert],
        timeframe: Timeframe,
    ) -> Result<PatternSummary, FetchError> {
        if alerts.is_empty() {
            return Ok(PatternSummary::empty());
        }

        let alerts_json =
            serde_json::to_string(alerts).map_err(|e| FetchError::Malformed(e.to_string()))?;
        let prompt = format!(
            r#"Analyze these alert patterns:
{alerts_json}
Timeframe: {}

Generate insights about:
1. Frequency patterns
2. Escalation trends
3. Risk assessment
4. Recommended actions

Return as JSON with:
{{
  "patterns": string[],
  "riskLevel": "low" | "medium" | "high",
  "recommendations": string[],
  "urgentActions": string[]
}}"#,
            timeframe.as_str()
        );

        let request = GenerationRequest::new(prompt, self.model.as_str())
            .max_tokens(PATTERNS_MAX_TOKENS)
            .temperature(PATTERNS_TEMPERATURE);
        let text = self.generator.generate(&request).await?;
        parse_summary(&extract_json_object(&text)?)
    }
}

/// Coerce the model's summary object. Unknown risk levels read as medium.
pub fn parse_summary(value: &Value) -> Result<PatternSummary, FetchError> {
    if !value.is_object() {
        return Err(FetchError::Malformed(
            "expected a JSON object for pattern summary".to_string(),
        ));
    }

    let risk_level = match string(value.get("riskLevel"))
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("low") => RiskLevel::Low,
        Some("high") => RiskLevel::High,
        _ => RiskLevel::Medium,
    };

    Ok(PatternSummary {
        patterns: string_list(value.get("patterns")),
        risk_level,
        recommendations: string_list(value.get("recommendations")),
        urgent_actions: string_list(value.get("urgentActions")),
    })
}
