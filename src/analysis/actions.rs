// Recommended actions for a classified alert.
//
// The model is asked for at most five actions as a JSON string array. When
// that fails for any reason the fixed fallback list is used instead, so a
// recommendation request never fails to its caller.

use std::sync::Arc;

use tracing::warn;

use crate::generation::json::{extract_json_array, string_list};
use crate::generation::traits::{FetchError, GenerationRequest, TextGenerator};
use crate::models::{ContentAnalysis, IncidentType, Severity};

const ACTIONS_MAX_TOKENS: u32 = 200;
const ACTIONS_TEMPERATURE: f32 = 0.3;

/// Upper bound on recommendations kept from a response.
pub const MAX_RECOMMENDATIONS: usize = 5;

pub const FALLBACK_ACTIONS: [&str; 3] = [
    "Document the incident",
    "Update security settings",
    "Contact support if needed",
];

pub fn fallback_actions() -> Vec<String> {
    FALLBACK_ACTIONS.iter().map(|s| s.to_string()).collect()
}

pub struct ActionRecommender {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ActionRecommender {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Recommended actions, or the fallback list on any failure.
    pub async fn recommend(
        &self,
        severity: Severity,
        incident_type: IncidentType,
        analysis: &ContentAnalysis,
    ) -> Vec<String> {
        match self
            .fetch_recommendations(severity, incident_type, analysis)
            .await
        {
            Ok(actions) => actions,
            Err(e) => {
                warn!(error = %e, %severity, %incident_type, "Using fallback recommendations");
                fallback_actions()
            }
        }
    }

    pub async fn fetch_recommendations(
        &self,
        severity: Severity,
        incident_type: IncidentType,
        analysis: &ContentAnalysis,
    ) -> Result<Vec<String>, FetchError> {
        let prompt = format!(
            "Given this content analysis:\n\
             - Severity: {severity}\n\
             - Type: {incident_type}\n\
             - Toxicity: {}\n\
             - Threat Level: {}\n\
             - Context: {}\n\n\
             Generate specific, actionable recommendations for handling this situation.\n\
             Focus on immediate safety, documentation, and support resources.\n\
             Return as a JSON array of strings, maximum {MAX_RECOMMENDATIONS} recommendations.",
            analysis.toxicity, analysis.threat_level, analysis.context,
        );

        let request = GenerationRequest::new(prompt, self.model.as_str())
            .max_tokens(ACTIONS_MAX_TOKENS)
            .temperature(ACTIONS_TEMPERATURE);
        let text = self.generator.generate(&request).await?;
        let value = extract_json_array(&text)?;
        parse_actions(&value)
    }
}

/// Keep non-blank string items, at most MAX_RECOMMENDATIONS of them.
pub fn parse_actions(value: &serde_json::Value) -> Result<Vec<String>, FetchError> {
    if !value.is_array() {
        return Err(FetchError::Malformed(
            "expected a JSON array of recommendations".to_string(),
        ));
    }

    let actions: Vec<String> = string_list(Some(value))
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .take(MAX_RECOMMENDATIONS)
        .collect();

    if actions.is_empty() {
        return Err(FetchError::Malformed("no recommendations returned".to_string()));
    }
    Ok(actions)
}
