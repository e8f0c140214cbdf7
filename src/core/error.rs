// src/core/error.rs
//! Failures a chat request can end in

use rocket::http::Status;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Missing 'message' field in request")]
    MissingMessage,

    #[error("Provider request failed: {0}")]
    Provider(String),

    /// Reserved: `ResponseFormatter::format` is infallible, so nothing produces this yet.
    /// Kept so a fallible formatting step maps onto the same 500 path as provider failures.
    #[error("Response formatting failed: {0}")]
    Format(String),
}

impl ChatError {
    pub fn status_code(&self) -> Status {
        match self {
            ChatError::MissingMessage => Status::BadRequest,
            // formatting failures are reported the same way as provider failures
            ChatError::Provider(_) | ChatError::Format(_) => Status::InternalServerError,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ChatError::MissingMessage)
    }
}

impl From<anyhow::Error> for ChatError {
    fn from(err: anyhow::Error) -> Self {
        ChatError::Provider(format!("{:#}", err))
    }
}
