// Cohere generate API implementation.
//
// Sends a single prompt to the /v1/generate endpoint and returns the text of
// the first generation. No retry: a failed call surfaces as a FetchError and
// the caller decides what to fall back to.
//
// API docs: https://docs.cohere.com/reference/generate

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{FetchError, GenerationRequest, TextGenerator};

pub const DEFAULT_API_URL: &str = "https://api.cohere.ai";

/// Cohere text generation client.
pub struct CohereGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CohereGenerator {
    /// Create a client for the given API key and base URL.
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TextGenerator for CohereGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, FetchError> {
        let url = format!("{}/v1/generate", self.base_url);

        let body = GenerateRequest {
            prompt: &request.prompt,
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let result: GenerateResponse = response.json().await?;
        let text = result
            .generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .ok_or(FetchError::Empty)?;

        debug!(
            model = %request.model,
            max_tokens = request.max_tokens,
            response_chars = text.len(),
            "Generation complete"
        );

        Ok(text.trim().to_string())
    }
}

// --- Cohere API request/response types ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    text: String,
}
