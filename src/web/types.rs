// src/web/types.rs
use rocket::serde::{Deserialize, Serialize};

use crate::utils::timestamp_now;

#[derive(Debug, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Error,
}

/// Envelope returned by the chat endpoint whatever the outcome
#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ChatResponse {
    pub response: String,
    pub status: ChatStatus,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChatResponse {
    pub fn success(response: String) -> Self {
        Self {
            response,
            status: ChatStatus::Success,
            timestamp: timestamp_now(),
            error: None,
        }
    }

    pub fn failure(response: String) -> Self {
        Self {
            response,
            status: ChatStatus::Error,
            timestamp: timestamp_now(),
            error: None,
        }
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
    pub timestamp: String,
    pub version: &'static str,
    pub gemini_configured: bool,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct SuggestionsResponse {
    pub message: &'static str,
    pub suggestions: Vec<&'static str>,
    pub timestamp: String,
}

pub struct ServerConfig {
    pub owner: Option<String>,
    pub about_me: String,
    pub frontend_origin: String,
    pub gemini_configured: bool,
}
