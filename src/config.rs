use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::generation::cohere::{CohereGenerator, DEFAULT_API_URL};
use crate::generation::traits::{DisabledGenerator, TextGenerator};

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy. Missing keys are not
/// fatal: features that need them degrade to their built-in fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    /// Generation API key (COHERE_API_KEY, or the legacy VITE_COHERE_API_KEY)
    pub cohere_api_key: String,
    /// Mapping API key (GOOGLE_MAPS_API_KEY, or VITE_GOOGLE_MAPS_API_KEY)
    pub maps_api_key: String,
    /// Base URL of the generation API (defaults to https://api.cohere.ai)
    pub cohere_api_url: String,
    /// Model identifier sent with every generation request
    pub model: String,
    /// Period of the synthetic alert simulation
    pub alert_interval: Duration,
    /// Per-request timeout for the generation API
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let alert_interval = env::var("MINDFUL_ALERT_INTERVAL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(crate::feed::simulation::DEFAULT_PERIOD);

        let http_timeout = env::var("MINDFUL_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            cohere_api_key: first_var(&["COHERE_API_KEY", "VITE_COHERE_API_KEY"]),
            maps_api_key: first_var(&["GOOGLE_MAPS_API_KEY", "VITE_GOOGLE_MAPS_API_KEY"]),
            cohere_api_url: env::var("COHERE_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            model: env::var("MINDFUL_MODEL").unwrap_or_else(|_| "command".to_string()),
            alert_interval,
            http_timeout,
        })
    }

    /// Names of the secrets that are not set. Logs a single warning when
    /// anything is missing; never fails.
    pub fn validate(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.cohere_api_key.is_empty() {
            missing.push("COHERE_API_KEY");
        }
        if self.maps_api_key.is_empty() {
            missing.push("GOOGLE_MAPS_API_KEY");
        }
        if !missing.is_empty() {
            warn!(
                missing = %missing.join(", "),
                "Missing environment variables, using fallback data"
            );
        }
        missing
    }

    pub fn has_generation_key(&self) -> bool {
        !self.cohere_api_key.is_empty()
    }

    /// Build the generator for this configuration. Without an API key (or
    /// if the HTTP client can't be built) this is a DisabledGenerator.
    pub fn generator(&self) -> Arc<dyn TextGenerator> {
        if !self.has_generation_key() {
            return Arc::new(DisabledGenerator);
        }
        match CohereGenerator::new(
            self.cohere_api_key.clone(),
            &self.cohere_api_url,
            self.http_timeout,
        ) {
            Ok(generator) => {
                info!(model = %self.model, "Using Cohere text generation");
                Arc::new(generator)
            }
            Err(e) => {
                warn!(error = %e, "Failed to build generation client, using fallbacks");
                Arc::new(DisabledGenerator)
            }
        }
    }
}

fn first_var(names: &[&str]) -> String {
    names
        .iter()
        .find_map(|name| env::var(name).ok().filter(|v| !v.is_empty()))
        .unwrap_or_default()
}
