// Fake text generators shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mindful::generation::traits::{FetchError, GenerationRequest, TextGenerator};

/// Replies by prompt prefix and counts calls. Prompts matching no prefix
/// fail as malformed.
pub struct ScriptedGenerator {
    replies: Vec<(&'static str, Result<String, u16>)>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self {
            replies: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Reply with `text` to prompts starting with `prefix`.
    pub fn on(mut self, prefix: &'static str, text: &str) -> Self {
        self.replies.push((prefix, Ok(text.to_string())));
        self
    }

    /// Fail with an HTTP status for prompts starting with `prefix`.
    pub fn fail_on(mut self, prefix: &'static str, status: u16) -> Self {
        self.replies.push((prefix, Err(status)));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for (prefix, reply) in &self.replies {
            if request.prompt.starts_with(prefix) {
                return match reply {
                    Ok(text) => Ok(text.clone()),
                    Err(status) => Err(FetchError::Status {
                        status: *status,
                        body: "scripted failure".to_string(),
                    }),
                };
            }
        }
        Err(FetchError::Malformed("no scripted reply".to_string()))
    }
}

pub const ANALYSIS_PROMPT: &str = "Analyze this content";
pub const ACTIONS_PROMPT: &str = "Given this content analysis";
pub const PATTERNS_PROMPT: &str = "Analyze these alert patterns";
pub const THERAPISTS_PROMPT: &str = "You are a mental health professional";
pub const EMERGENCY_PROMPT: &str = "Check if this message";
pub const INSIGHTS_PROMPT: &str = "Analyze this therapy progress data";
