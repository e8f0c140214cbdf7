// src/web/mod.rs

pub mod cors_utils;
pub mod handlers;
pub mod types;

pub use cors_utils::Cors;
pub use types::*;

use crate::core::{AnswerProvider, ChatService, ConfigManager, GeminiClient, ProfileStore};
use crate::types::Profile;
use crate::utils::timestamp_now;
use anyhow::Result;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{catchers, get, post, routes, Build, Request, Rocket, State};
use std::sync::Arc;
use tracing::{error, info};

#[post("/chat", data = "<request>")]
pub async fn chat(
    request: Result<Json<ChatRequest>, json::Error<'_>>,
    service: &State<ChatService>,
) -> (Status, Json<ChatResponse>) {
    handlers::chat_handler(request, service).await
}

#[get("/health")]
pub async fn health(config: &State<ServerConfig>) -> Json<HealthResponse> {
    handlers::health_handler(config).await
}

#[get("/profile")]
pub async fn get_profile(store: &State<ProfileStore>) -> Json<Profile> {
    handlers::get_profile_handler(store).await
}

#[get("/test")]
pub async fn suggestions() -> Json<SuggestionsResponse> {
    handlers::suggestions_handler().await
}

#[get("/about-me")]
pub async fn about_me(config: &State<ServerConfig>) -> String {
    handlers::about_me_handler(config).await
}

// Error catchers: answer in the chat envelope shape even when routing fails

#[rocket::catch(default)]
pub fn default_catcher(status: Status, _request: &Request) -> Json<ChatResponse> {
    let message = match status.code {
        400 | 422 => "The request could not be understood. Send JSON like {\"message\": \"...\"}.",
        404 => "Nothing here. Try POST /api/chat.",
        _ => crate::core::chat_service::FAILURE_MESSAGE,
    };
    Json(ChatResponse::failure(message.to_string()).with_error(status.to_string()))
}

/// Assemble the server without launching it
pub fn build_rocket(
    store: ProfileStore,
    provider: Arc<dyn AnswerProvider>,
    server_config: ServerConfig,
) -> Result<Rocket<Build>> {
    let chat_service = ChatService::new(&store, provider)?;

    Ok(rocket::build()
        .attach(Cors::new(server_config.frontend_origin.clone()))
        .manage(store)
        .manage(chat_service)
        .manage(server_config)
        .register("/", catchers![default_catcher])
        .mount(
            "/api",
            routes![
                chat,
                health,
                get_profile,
                suggestions,
                cors_utils::universal_options_handler,
            ],
        )
        .mount("/", routes![about_me]))
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    let profile = ProfileStore::load(&config.environment.profile_path)?;

    let gemini = GeminiClient::new(
        config.provider.api_key.clone(),
        config.environment.request_timeout_seconds,
    )?;

    let server_config = ServerConfig {
        owner: profile.owner_name().map(str::to_string),
        about_me: config.about_me().to_string(),
        frontend_origin: config.environment.frontend_origin.clone(),
        gemini_configured: gemini.is_configured(),
    };

    info!("Starting Portfolio Chat API server");
    info!("Profile: {}", config.environment.profile_path.display());
    info!("Allowed origin: {}", server_config.frontend_origin);
    info!("Provider key configured: {}", server_config.gemini_configured);
    info!("Server: http://0.0.0.0:{} (started {})", config.environment.port, timestamp_now());

    let figment = rocket::Config::figment()
        .merge(("port", config.environment.port))
        .merge(("address", "0.0.0.0"));

    let rocket = build_rocket(profile, Arc::new(gemini), server_config)?.configure(figment);

    if let Err(e) = rocket.launch().await {
        error!("Server stopped with error: {}", e);
        return Err(anyhow::anyhow!("Rocket failed to launch: {}", e));
    }

    Ok(())
}
