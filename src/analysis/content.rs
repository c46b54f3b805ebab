// Content analysis via the generation endpoint.
//
// The model is asked for a JSON object with toxicity, threat level,
// harassment probability, keywords and a context description. The local
// sentiment score is merged in afterwards.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::generation::json::{extract_json_object, string, string_list, unit_f64};
use crate::generation::traits::{FetchError, GenerationRequest, TextGenerator};
use crate::models::ContentAnalysis;
use crate::output::truncate_chars;
use crate::scoring::sentiment::SentimentScorer;

const ANALYSIS_MAX_TOKENS: u32 = 500;
const ANALYSIS_TEMPERATURE: f32 = 0.2;

/// Analyzes free text for harassment signals.
pub struct ContentAnalyzer {
    generator: Arc<dyn TextGenerator>,
    sentiment: SentimentScorer,
    model: String,
}

impl ContentAnalyzer {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            sentiment: SentimentScorer::new(),
            model: model.into(),
        }
    }

    /// Analyze content, returning None for empty input or any failure.
    /// Failures are logged, never propagated.
    pub async fn analyze(&self, content: &str, context_label: &str) -> Option<ContentAnalysis> {
        match self.fetch_analysis(content, context_label).await {
            Ok(analysis) => Some(analysis),
            Err(FetchError::EmptyInput) => None,
            Err(e) => {
                warn!(error = %e, context = context_label, "Content analysis failed");
                None
            }
        }
    }

    /// One generation call per invocation; empty input never reaches the
    /// network.
    pub async fn fetch_analysis(
        &self,
        content: &str,
        context_label: &str,
    ) -> Result<ContentAnalysis, FetchError> {
        if content.trim().is_empty() {
            return Err(FetchError::EmptyInput);
        }

        let sentiment = self.sentiment.score(content);

        let request = GenerationRequest::new(analysis_prompt(content), self.model.as_str())
            .max_tokens(ANALYSIS_MAX_TOKENS)
            .temperature(ANALYSIS_TEMPERATURE);
        let text = self.generator.generate(&request).await?;
        let value = extract_json_object(&text)?;

        let mut analysis = parse_analysis(&value)?;
        analysis.sentiment = sentiment.normalized.clamp(0.0, 1.0);

        debug!(
            context = context_label,
            toxicity = analysis.toxicity,
            threat_level = analysis.threat_level,
            harassment = analysis.harassment_probability,
            sentiment_raw = sentiment.raw,
            preview = %truncate_chars(content, 50),
            "Analyzed content"
        );

        Ok(analysis)
    }
}

fn analysis_prompt(content: &str) -> String {
    format!(
        r#"Analyze this content for signs of digital harassment, cyberbullying, or online threats.
Content: "{content}"

Provide a detailed analysis focusing on:
1. Threat level assessment
2. Harassment indicators
3. Key concerning phrases
4. Context and intent analysis

Format as JSON with these fields:
{{
  "toxicity": number (0-1),
  "threat_level": number (0-1),
  "harassment_probability": number (0-1),
  "keywords": string[],
  "context": string
}}"#
    )
}

/// Coerce the model's JSON into an analysis. Missing numeric fields default
/// to 0 and everything is clamped to [0, 1]; only a non-object is rejected.
/// Sentiment is left at 0 for the caller to fill in.
pub fn parse_analysis(value: &Value) -> Result<ContentAnalysis, FetchError> {
    if !value.is_object() {
        return Err(FetchError::Malformed(
            "expected a JSON object for content analysis".to_string(),
        ));
    }

    Ok(ContentAnalysis {
        toxicity: unit_f64(value.get("toxicity")),
        threat_level: unit_f64(value.get("threat_level")),
        harassment_probability: unit_f64(value.get("harassment_probability")),
        sentiment: 0.0,
        keywords: string_list(value.get("keywords")),
        context: string(value.get("context")).unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_full_object() {
        let v = json!({
            "toxicity": 0.8,
            "threat_level": 0.2,
            "harassment_probability": 0.6,
            "keywords": ["loser", "nobody likes you"],
            "context": "Targeted insult in a group chat"
        });
        let a = parse_analysis(&v).unwrap();
        assert_eq!(a.toxicity, 0.8);
        assert_eq!(a.threat_level, 0.2);
        assert_eq!(a.harassment_probability, 0.6);
        assert_eq!(a.keywords.len(), 2);
        assert_eq!(a.context, "Targeted insult in a group chat");
    }

    #[test]
    fn parse_defaults_and_clamps() {
        let v = json!({"toxicity": 3.0, "threat_level": "0.5"});
        let a = parse_analysis(&v).unwrap();
        assert_eq!(a.toxicity, 1.0);
        assert_eq!(a.threat_level, 0.5);
        assert_eq!(a.harassment_probability, 0.0);
        assert!(a.keywords.is_empty());
        assert_eq!(a.context, "");
    }

    #[test]
    fn parse_rejects_array() {
        assert!(parse_analysis(&json!([1, 2])).is_err());
    }

    #[test]
    fn prompt_embeds_content() {
        let p = analysis_prompt("you are nothing");
        assert!(p.contains("Content: \"you are nothing\""));
        assert!(p.contains("\"harassment_probability\""));
    }
}
