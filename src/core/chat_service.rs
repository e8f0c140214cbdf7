// src/core/chat_service.rs
//! Per-request chat flow: validate, prompt, call the provider, format

use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{AnswerProvider, ChatError, ProfileStore, PromptBuilder, ResponseFormatter};
use crate::utils::normalize_message;

pub const FAILURE_MESSAGE: &str =
    "Sorry, I'm experiencing technical difficulties. Please try again! 🤖";

pub struct ChatService {
    prompts: PromptBuilder,
    provider: Arc<dyn AnswerProvider>,
    formatter: ResponseFormatter,
    no_answer_fallback: String,
}

impl ChatService {
    pub fn new(profile: &ProfileStore, provider: Arc<dyn AnswerProvider>) -> Result<Self> {
        let owner = profile.display_name();
        let formatter = ResponseFormatter::new(format!(
            "I'm here to help! Feel free to ask me anything about {}. 😊",
            owner
        ))?;

        Ok(Self {
            prompts: PromptBuilder::new(profile),
            provider,
            formatter,
            no_answer_fallback: format!(
                "I'm here to help! Ask me about {}'s experience, skills, projects, or contact info. 😊",
                owner
            ),
        })
    }

    /// Answer one visitor message. Blank or missing input is rejected before any network call.
    pub async fn answer(&self, message: Option<&str>) -> Result<String, ChatError> {
        let question = normalize_message(message).ok_or(ChatError::MissingMessage)?;
        info!("Chat request received ({} chars)", question.chars().count());

        let prompt = self.prompts.build(question);

        match self.provider.generate(&prompt).await? {
            Some(text) => Ok(self.formatter.format(Some(text.trim()))),
            None => {
                warn!("Provider returned no answer text, using fallback");
                Ok(self.no_answer_fallback.clone())
            }
        }
    }

    pub fn no_answer_fallback(&self) -> &str {
        &self.no_answer_fallback
    }
}
