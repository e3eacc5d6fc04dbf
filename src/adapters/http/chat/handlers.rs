//! HTTP handlers for the purchase chat endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{domain_error_response, ErrorResponse};
use crate::application::{HandleChatMessageCommand, HandleChatMessageHandler};
use crate::domain::intake::template_text;

use super::dto::{ChatRequest, ChatResponse};

#[derive(Clone)]
pub struct ChatHandlers {
    handle_message: Arc<HandleChatMessageHandler>,
}

impl ChatHandlers {
    pub fn new(handle_message: Arc<HandleChatMessageHandler>) -> Self {
        Self { handle_message }
    }
}

/// POST /api/chat/purchases - Resolve one customer message
pub async fn post_purchase_message(State(handlers): State<ChatHandlers>, body: Bytes) -> Response {
    let request = ChatRequest::from_slice(&body);
    let locale = request.locale();

    let message = match request.message() {
        Ok(message) => message.to_string(),
        Err(e) => {
            tracing::debug!("Rejected chat request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::message_required(locale)),
            )
                .into_response();
        }
    };

    let cmd = HandleChatMessageCommand {
        user_id: request.user_id(),
        message,
        locale,
        context: request.context(),
    };

    match handlers.handle_message.handle(cmd).await {
        Ok(result) => {
            let response = ChatResponse::new(result, template_text("bot.name", locale));
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => domain_error_response(&e, locale),
    }
}
