//! Completion service interaction.
//!
//! This module talks to an OpenAI-compatible chat completion endpoint. Each
//! request carries the configured model, temperature and a single user-role
//! message; the first choice's message content is the answer.
//!
//! # Architecture
//!
//! - [`CompletionService`]: Core trait defining one prompt → text exchange
//! - [`OpenAiCompletion`]: `reqwest` implementation against `/chat/completions`
//!
//! Requests are made once. There is no retry or backoff here; callers decide
//! what to do with a [`CompletionError`].

use crate::config::Config;
use crate::utils::truncate_for_log;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Why a completion request produced no usable text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompletionError {
    /// The service could not be reached or answered with a non-success status.
    #[error("completion service unavailable: {0}")]
    Unavailable(String),
    /// The service answered, but the body was not a usable completion.
    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// Trait for async text completion.
///
/// Implementors send a prompt to a language model and return its text
/// answer. The abstraction lets the extractor run against a stub in tests.
pub trait CompletionService {
    /// Send `prompt` as a single user message and return the model's reply.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat completion client.
#[derive(Clone)]
pub struct OpenAiCompletion {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl fmt::Debug for OpenAiCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiCompletion")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl OpenAiCompletion {
    pub fn new(client: Client, config: &Config) -> Self {
        OpenAiCompletion {
            client,
            base_url: config.settings.completion_base_url.trim_end_matches('/').to_string(),
            api_key: config.credentials.completion_api_key.clone(),
            model: config.settings.model.clone(),
            temperature: config.settings.temperature,
        }
    }
}

impl CompletionService for OpenAiCompletion {
    #[instrument(level = "info", skip_all, fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let t0 = Instant::now();
        let request = ChatRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Unavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Unavailable(e.to_string()))?;
        let dt = t0.elapsed();

        if !status.is_success() {
            warn!(
                elapsed_ms = dt.as_millis(),
                %status,
                body = %truncate_for_log(&body, 300),
                "Completion API call failed"
            );
            return Err(CompletionError::Unavailable(format!(
                "HTTP {status}: {}",
                truncate_for_log(&body, 200)
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CompletionError::Malformed("response has no message content".to_string()))?;

        debug!(
            elapsed_ms = dt.as_millis(),
            response_preview = %truncate_for_log(&content, 300),
            "Raw completion response"
        );
        Ok(content)
    }
}
