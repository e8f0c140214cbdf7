// src/core/gemini_client.rs
//! Generative-language provider client - one POST per question, no retries

use anyhow::{Context, Result};
use std::fmt;
use std::time::Duration;

use crate::app_log;
use crate::core::ChatError;
use crate::types::provider::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};

pub const GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent";

const TEMPERATURE: f32 = 0.7;
const MAX_OUTPUT_TOKENS: u32 = 200;
const TOP_P: f32 = 0.8;
const TOP_K: u32 = 40;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Something that can turn a prompt into answer text.
///
/// `Ok(None)` means the provider answered but had nothing to say
/// (no candidates or no parts); callers substitute their fallback text.
#[rocket::async_trait]
pub trait AnswerProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ChatError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"***")
            .finish()
    }
}

impl GeminiClient {
    pub fn new(api_key: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: GEMINI_ENDPOINT.to_string(),
            api_key,
        })
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    async fn request_answer(&self, prompt: &str) -> Result<Option<String>> {
        if !self.is_configured() {
            anyhow::bail!("Provider API key is not configured");
        }

        let payload = build_payload(prompt);

        app_log!(trace, "Calling provider: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            // reqwest errors carry the URL, which includes the key
            .map_err(|e| anyhow::anyhow!("{}", e.without_url()))
            .context("Failed to call provider")?;

        let status = response.status();
        app_log!(info, "Provider response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| anyhow::anyhow!("{}", e.without_url()))
            .context("Failed to read provider response")?;

        if !status.is_success() {
            app_log!(error, "Provider error response: {}", truncate_for_log(&body));
            anyhow::bail!("Provider returned error status {}", status);
        }

        extract_answer(&body)
    }
}

#[rocket::async_trait]
impl AnswerProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, ChatError> {
        self.request_answer(prompt).await.map_err(ChatError::from)
    }
}

/// Provider request body with the fixed generation parameters
pub fn build_payload(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest::from_prompt(
        prompt,
        GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
            top_p: TOP_P,
            top_k: TOP_K,
        },
    )
}

/// Pull the first candidate's first text part out of a provider response body.
///
/// No candidates, or a candidate with no parts, is an empty answer (`Ok(None)`).
/// A candidate without content, or a first part without text, is malformed.
pub fn extract_answer(body: &str) -> Result<Option<String>> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).context("Failed to parse provider response")?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Ok(None);
    };

    let content = candidate
        .content
        .context("Provider candidate has no content")?;

    let Some(part) = content.parts.into_iter().next() else {
        return Ok(None);
    };

    let text = part.text.context("Provider content part has no text")?;
    Ok(Some(text))
}

fn truncate_for_log(body: &str) -> String {
    const LIMIT: usize = 512;
    if body.chars().count() > LIMIT {
        format!("{}...", body.chars().take(LIMIT).collect::<String>())
    } else {
        body.to_string()
    }
}
