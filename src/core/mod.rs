// src/core/mod.rs
//! Chat relay core: profile, prompt, provider call, formatting

pub mod chat_service;
pub mod config_manager;
pub mod error;
pub mod formatter;
pub mod gemini_client;
pub mod profile_store;
pub mod prompt_builder;

pub use chat_service::ChatService;
pub use config_manager::ConfigManager;
pub use error::ChatError;
pub use formatter::ResponseFormatter;
pub use gemini_client::{AnswerProvider, GeminiClient};
pub use profile_store::ProfileStore;
pub use prompt_builder::PromptBuilder;
