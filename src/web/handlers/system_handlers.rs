// src/web/handlers/system_handlers.rs
use crate::core::ProfileStore;
use crate::types::Profile;
use crate::utils::timestamp_now;
use crate::web::types::{HealthResponse, ServerConfig, SuggestionsResponse};

use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

const SUGGESTIONS: [&str; 5] = [
    "What's your experience?",
    "Tell me about your skills",
    "What projects have you worked on?",
    "How can I contact you?",
    "What's your education background?",
];

pub async fn health_handler(config: &State<ServerConfig>) -> Json<HealthResponse> {
    info!("Health check");
    Json(HealthResponse {
        status: "OK",
        message: health_message(config.owner.as_deref()),
        timestamp: timestamp_now(),
        version: env!("CARGO_PKG_VERSION"),
        gemini_configured: config.gemini_configured,
    })
}

fn health_message(owner: Option<&str>) -> String {
    match owner {
        Some(name) => format!("{}'s Portfolio Chat API is running!", name),
        None => "Portfolio Chat API is running!".to_string(),
    }
}

pub async fn get_profile_handler(profile: &State<ProfileStore>) -> Json<Profile> {
    Json(profile.profile().clone())
}

pub async fn suggestions_handler() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        message: "Chat API is working! Try asking about:",
        suggestions: SUGGESTIONS.to_vec(),
        timestamp: timestamp_now(),
    })
}

pub async fn about_me_handler(config: &State<ServerConfig>) -> String {
    config.about_me.clone()
}
