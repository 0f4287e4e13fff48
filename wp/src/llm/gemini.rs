//! Gemini API client implementation
//!
//! Implements the LlmClient trait against the Generative Language API
//! (`models/{model}:generateContent`), for both free-form text and
//! schema-constrained JSON responses.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{LlmClient, LlmError};
use crate::config::LlmConfig;

/// Maximum number of retries for transient errors
const MAX_RETRIES: u32 = 3;

/// Initial backoff delay for retries
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = config
            .get_api_key()
            .map_err(|_| LlmError::MissingApiKey(config.api_key_env.clone()))?;

        // The timeout lives on the HTTP client; every request inherits it
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Build the request body for a generateContent call
    ///
    /// A schema switches the provider into structured JSON output mode.
    fn build_request_body(&self, prompt: &str, schema: Option<&Value>) -> Value {
        debug!(%self.model, has_schema = schema.is_some(), "build_request_body: called");
        let mut generation_config = serde_json::json!({
            "maxOutputTokens": self.max_output_tokens,
        });

        if let Some(schema) = schema {
            generation_config["responseMimeType"] = serde_json::json!("application/json");
            generation_config["responseSchema"] = schema.clone();
        }

        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }],
            }],
            "generationConfig": generation_config,
        })
    }

    /// Extract the first candidate's text from a parsed API response
    fn parse_response(&self, api_response: GeminiResponse) -> Result<String, LlmError> {
        debug!(candidates = api_response.candidates.len(), "parse_response: called");
        api_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no text".to_string()))
    }

    /// Send a generateContent request with retry on transient failures
    async fn send(&self, body: Value) -> Result<String, LlmError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        debug!(%url, "send: called");

        let mut last_error = None;
        for attempt in 0..=MAX_RETRIES {
            if attempt > 0 {
                let backoff = INITIAL_BACKOFF_MS * 2u64.pow(attempt - 1);
                warn!(attempt, backoff_ms = backoff, "send: retrying after transient error");
                tokio::time::sleep(Duration::from_millis(backoff)).await;
            }

            let response = match self
                .http
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    debug!(error = %e, "send: network error");
                    last_error = Some(LlmError::Network(e));
                    continue;
                }
            };

            let status = response.status().as_u16();
            if !response.status().is_success() {
                let message = response.text().await.unwrap_or_default();
                debug!(status, "send: non-success status");
                let error = LlmError::ApiError { status, message };
                if is_retryable_status(status) {
                    last_error = Some(error);
                    continue;
                }
                return Err(error);
            }

            let api_response: GeminiResponse = response.json().await.map_err(LlmError::Network)?;
            return self.parse_response(api_response);
        }

        Err(last_error.unwrap_or_else(|| LlmError::InvalidResponse("Retries exhausted".to_string())))
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        debug!(prompt_len = prompt.len(), "generate_text: called");
        let body = self.build_request_body(prompt, None);
        self.send(body).await
    }

    async fn generate_json(&self, prompt: &str, schema: Value) -> Result<Value, LlmError> {
        debug!(prompt_len = prompt.len(), "generate_json: called");
        let body = self.build_request_body(prompt, Some(&schema));
        let text = self.send(body).await?;
        serde_json::from_str(&text).map_err(LlmError::Json)
    }
}

// ============================================================================
// API response types
// ============================================================================

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Default, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: Option<String>,
}
