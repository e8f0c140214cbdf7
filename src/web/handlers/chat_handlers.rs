// src/web/handlers/chat_handlers.rs
use crate::core::chat_service::FAILURE_MESSAGE;
use crate::core::ChatService;
use crate::web::types::{ChatRequest, ChatResponse};

use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::State;
use tracing::{error, warn};

const MISSING_MESSAGE_REPLY: &str = "Please type a question so I have something to answer! 💬";

pub async fn chat_handler(
    request: Result<Json<ChatRequest>, json::Error<'_>>,
    chat: &State<ChatService>,
) -> (Status, Json<ChatResponse>) {
    let message = match request {
        Ok(body) => body.into_inner().message,
        Err(json::Error::Io(e)) => {
            warn!("Failed to read chat request body: {}", e);
            None
        }
        Err(json::Error::Parse(_, e)) => {
            warn!("Rejected malformed chat request body: {}", e);
            None
        }
    };

    match chat.answer(message.as_deref()).await {
        Ok(answer) => (Status::Ok, Json(ChatResponse::success(answer))),
        Err(err) if err.is_validation() => (
            err.status_code(),
            Json(
                ChatResponse::failure(MISSING_MESSAGE_REPLY.to_string())
                    .with_error(err.to_string()),
            ),
        ),
        Err(err) => {
            error!("Chat API error: {}", err);
            (
                err.status_code(),
                Json(ChatResponse::failure(FAILURE_MESSAGE.to_string())),
            )
        }
    }
}
