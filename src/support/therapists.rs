// Therapist matching via the generation endpoint, with local fallback.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::directory::{default_directory, BETTERHELP_URL, PSYCHOLOGY_TODAY_URL, TALKSPACE_URL};
use crate::generation::json::{extract_json_array, number, string, string_list};
use crate::generation::traits::{FetchError, GenerationRequest, TextGenerator};

const MATCH_MAX_TOKENS: u32 = 1000;
const MATCH_TEMPERATURE: f32 = 0.7;

const DEFAULT_RATING: f64 = 4.5;
const DEFAULT_MATCH_SCORE: f64 = 85.0;

static NEXT_PROFILE: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistProfile {
    pub id: String,
    pub name: String,
    pub specialty: String,
    /// 0.0 to 5.0
    pub rating: f64,
    pub website: String,
    pub availability: String,
    pub credentials: Vec<String>,
    /// 0.0 to 100.0
    pub ai_match_score: f64,
}

/// Map whatever the model said about a website onto a verified platform.
pub fn verified_platform(website: Option<&str>) -> &'static str {
    let lower = website.unwrap_or_default().to_lowercase();
    if lower.contains("talkspace") {
        TALKSPACE_URL
    } else if lower.contains("psychologytoday") || lower.contains("psychology today") {
        PSYCHOLOGY_TODAY_URL
    } else {
        BETTERHELP_URL
    }
}

/// Coerce one generated profile, defaulting anything missing.
pub fn sanitize_profile(value: &Value) -> TherapistProfile {
    let id = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        NEXT_PROFILE.fetch_add(1, Ordering::Relaxed)
    );

    let rating = number(value.get("rating"))
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(DEFAULT_RATING)
        .clamp(0.0, 5.0);
    let ai_match_score = number(value.get("aiMatchScore"))
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(DEFAULT_MATCH_SCORE)
        .clamp(0.0, 100.0);

    TherapistProfile {
        id,
        name: non_blank(value.get("name")).unwrap_or_else(|| "Unknown Therapist".to_string()),
        specialty: non_blank(value.get("specialty"))
            .unwrap_or_else(|| "Digital Mental Health".to_string()),
        rating,
        website: verified_platform(string(value.get("website")).as_deref()).to_string(),
        availability: non_blank(value.get("availability"))
            .unwrap_or_else(|| "Contact for availability".to_string()),
        credentials: string_list(value.get("credentials")),
        ai_match_score,
    }
}

fn non_blank(value: Option<&Value>) -> Option<String> {
    string(value).filter(|s| !s.trim().is_empty())
}

/// Keyword relevance ranking: +2 per keyword found in the specialty, +1 per
/// keyword found in any credential. Equal relevance falls back to rating.
pub fn basic_ranking(needs: &str, therapists: &[TherapistProfile]) -> Vec<TherapistProfile> {
    let needs = needs.to_lowercase();
    let keywords: Vec<&str> = needs.split_whitespace().collect();

    let relevance = |t: &TherapistProfile| -> u32 {
        let specialty = t.specialty.to_lowercase();
        let credentials: Vec<String> = t.credentials.iter().map(|c| c.to_lowercase()).collect();
        keywords
            .iter()
            .map(|k| {
                let in_specialty = if specialty.contains(k) { 2 } else { 0 };
                let in_credentials = if credentials.iter().any(|c| c.contains(k)) { 1 } else { 0 };
                in_specialty + in_credentials
            })
            .sum()
    };

    let mut ranked: Vec<(u32, TherapistProfile)> =
        therapists.iter().map(|t| (relevance(t), t.clone())).collect();
    ranked.sort_by(|(ra, a), (rb, b)| {
        rb.cmp(ra)
            .then_with(|| b.rating.total_cmp(&a.rating))
    });
    ranked.into_iter().map(|(_, t)| t).collect()
}

pub struct SupportMatcher {
    generator: Arc<dyn TextGenerator>,
    model: String,
    directory: Vec<TherapistProfile>,
}

impl SupportMatcher {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
            directory: default_directory(),
        }
    }

    /// Generated profiles, or the built-in directory ranked for `needs`.
    pub async fn recommend(&self, needs: &str) -> Vec<TherapistProfile> {
        match self.fetch_therapists(needs).await {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!(error = %e, "Using built-in therapist directory");
                basic_ranking(needs, &self.directory)
            }
        }
    }

    pub async fn fetch_therapists(&self, needs: &str) -> Result<Vec<TherapistProfile>, FetchError> {
        if needs.trim().is_empty() {
            return Err(FetchError::EmptyInput);
        }

        let prompt = format!(
            r#"You are a mental health professional matching system. Generate 3 therapist profiles specializing in:
{needs}

Focus ONLY on social media and online harassment issues.

Requirements:
1. Each therapist MUST specialize in digital wellness, cyberbullying recovery, social media mental health, or online harassment trauma.
2. ONLY use these therapy platforms: BetterHelp, Talkspace, Psychology Today.
3. Format as a JSON array with this EXACT structure:
[
  {{
    "name": "string",
    "specialty": "string",
    "rating": number,
    "website": "string (platform name only)",
    "availability": "string",
    "credentials": ["string"],
    "aiMatchScore": number
  }}
]
4. Ratings should be between 4.5 and 5.0
5. AI match scores should be between 85 and 100

Return ONLY the JSON array, no other text."#
        );

        let request = GenerationRequest::new(prompt, self.model.as_str())
            .max_tokens(MATCH_MAX_TOKENS)
            .temperature(MATCH_TEMPERATURE);
        let text = self.generator.generate(&request).await?;

        match extract_json_array(&text)? {
            Value::Array(items) if !items.is_empty() => {
                Ok(items.iter().map(sanitize_profile).collect())
            }
            _ => Err(FetchError::Malformed(
                "expected a non-empty JSON array of profiles".to_string(),
            )),
        }
    }
}
