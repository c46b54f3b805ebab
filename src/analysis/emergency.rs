// Emergency detection for a single message.
//
// A yes/no question to the generation endpoint. The reply counts as an
// emergency only when it reads exactly "true" after trimming and
// lowercasing; anything else, including every failure, is "not an
// emergency".

use std::sync::Arc;

use tracing::{info, warn};

use crate::generation::traits::{FetchError, GenerationRequest, TextGenerator};

const EMERGENCY_MAX_TOKENS: u32 = 5;
const EMERGENCY_TEMPERATURE: f32 = 0.1;

pub struct EmergencyDetector {
    generator: Arc<dyn TextGenerator>,
    model: String,
}

impl EmergencyDetector {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    /// True only on an explicit "true" verdict. Failures are logged and
    /// read as false.
    pub async fn is_emergency(&self, message: &str) -> bool {
        match self.fetch_verdict(message).await {
            Ok(emergency) => {
                if emergency {
                    info!("Message flagged as an emergency");
                }
                emergency
            }
            Err(FetchError::EmptyInput) => false,
            Err(e) => {
                warn!(error = %e, "Emergency check failed, treating as non-emergency");
                false
            }
        }
    }

    /// One generation call; empty input never reaches the network.
    pub async fn fetch_verdict(&self, message: &str) -> Result<bool, FetchError> {
        if message.trim().is_empty() {
            return Err(FetchError::EmptyInput);
        }

        let prompt = format!(
            r#"Check if this message indicates an emergency:
"{message}"

Return ONLY "true" for:
- Immediate danger
- Severe harassment
- Urgent threats
- Crisis situation

Return "false" otherwise.

Response:"#
        );

        let request = GenerationRequest::new(prompt, self.model.as_str())
            .max_tokens(EMERGENCY_MAX_TOKENS)
            .temperature(EMERGENCY_TEMPERATURE);
        let text = self.generator.generate(&request).await?;
        Ok(parse_verdict(&text))
    }
}

/// Exact match on "true", ignoring case and surrounding whitespace.
pub fn parse_verdict(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("true")
}
