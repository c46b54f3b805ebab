// TextGenerator trait and the error type shared by every external call.

use async_trait::async_trait;
use thiserror::Error;

/// A single completion request sent to the generation endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            max_tokens: 100,
            temperature: 0.3,
        }
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Why an external fetch produced no usable value.
///
/// Callers that need UI-renderable data apply their fallback once, at the
/// point where they match on this.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("generation API key is not configured")]
    NotConfigured,

    #[error("input was empty")]
    EmptyInput,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("API returned no generations")]
    Empty,

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Trait for producing text completions. Implementations are async because
/// the real provider is an HTTP API.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the request and return its raw text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, FetchError>;
}

/// Generator used when no API key is available. Every call fails with
/// `NotConfigured`, which sends consumers down their fallback path without
/// touching the network.
pub struct DisabledGenerator;

#[async_trait]
impl TextGenerator for DisabledGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, FetchError> {
        Err(FetchError::NotConfigured)
    }
}
