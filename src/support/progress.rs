// Progress insights: short observations about someone's recovery trend.
//
// The generation endpoint reads the weekly score series and returns a JSON
// array of `{type, message}` items. Missing fields are defaulted per item;
// a reply that isn't an array is an error, and the consumer swaps in a
// fixed set of insights.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::generation::json::{extract_json_array, string};
use crate::generation::traits::{FetchError, GenerationRequest, TextGenerator};

const INSIGHTS_MAX_TOKENS: u32 = 500;
const INSIGHTS_TEMPERATURE: f32 = 0.7;

const DEFAULT_KIND: &str = "suggestion";
const DEFAULT_MESSAGE: &str = "No insight available";

/// Weekly self-reported scores, all on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressData {
    pub dates: Vec<String>,
    pub wellbeing_scores: Vec<f64>,
    pub anxiety_levels: Vec<f64>,
    pub coping_scores: Vec<f64>,
}

impl ProgressData {
    /// Six weeks of demonstration data.
    pub fn sample() -> Self {
        Self {
            dates: [
                "2024-02-01",
                "2024-02-08",
                "2024-02-15",
                "2024-02-22",
                "2024-02-29",
                "2024-03-07",
            ]
            .iter()
            .map(|d| d.to_string())
            .collect(),
            wellbeing_scores: vec![65.0, 68.0, 72.0, 70.0, 75.0, 78.0],
            anxiety_levels: vec![72.0, 68.0, 65.0, 63.0, 60.0, 55.0],
            coping_scores: vec![60.0, 63.0, 68.0, 70.0, 73.0, 75.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Usually "improvement", "warning" or "suggestion"; kept as given.
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}

impl Insight {
    fn new(kind: &str, message: &str) -> Self {
        Self {
            kind: kind.to_string(),
            message: message.to_string(),
        }
    }
}

pub fn fallback_insights() -> Vec<Insight> {
    vec![
        Insight::new(
            "improvement",
            "Your overall well-being score has improved by 20% over the past month.",
        ),
        Insight::new(
            "improvement",
            "Anxiety levels have decreased consistently, showing good progress in coping strategies.",
        ),
        Insight::new(
            "suggestion",
            "Consider increasing mindfulness exercises during high-stress periods.",
        ),
    ]
}

pub struct ProgressAdvisor {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl ProgressAdvisor {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// Generated insights, or the fixed fallback set on any failure.
    pub async fn insights(&self, data: &ProgressData) -> Vec<Insight> {
        match self.fetch_insights(data).await {
            Ok(insights) => insights,
            Err(e) => {
                warn!(error = %e, weeks = data.dates.len(), "Using fallback progress insights");
                fallback_insights()
            }
        }
    }

    pub async fn fetch_insights(&self, data: &ProgressData) -> Result<Vec<Insight>, FetchError> {
        let data_json = serde_json::to_string_pretty(data)
            .map_err(|e| FetchError::Malformed(e.to_string()))?;
        let prompt = format!(
            r#"Analyze this therapy progress data and generate 4 insights:
{data_json}

Generate insights about:
1. Overall progress trends
2. Areas of improvement
3. Potential concerns
4. Actionable suggestions

Format as JSON array:
[
  {{
    "type": "improvement" | "warning" | "suggestion",
    "message": "Clear, specific insight"
  }}
]

Focus on:
- Digital wellness
- Online anxiety management
- Coping strategies
- Social media habits

Keep messages concise and actionable.
Return ONLY the JSON array."#
        );

        let request = GenerationRequest::new(prompt, self.model.as_str())
            .max_tokens(INSIGHTS_MAX_TOKENS)
            .temperature(INSIGHTS_TEMPERATURE);
        let text = self.generator.generate(&request).await?;
        parse_insights(&extract_json_array(&text)?)
    }
}

/// Coerce every array item into an insight. Blank or missing fields take
/// their defaults; only a non-array is rejected.
pub fn parse_insights(value: &Value) -> Result<Vec<Insight>, FetchError> {
    let items = value.as_array().ok_or_else(|| {
        FetchError::Malformed("expected a JSON array of insights".to_string())
    })?;

    Ok(items
        .iter()
        .map(|item| Insight {
            kind: non_blank(item.get("type")).unwrap_or_else(|| DEFAULT_KIND.to_string()),
            message: non_blank(item.get("message"))
                .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        })
        .collect())
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    string(value).filter(|s| !s.is_empty())
}
