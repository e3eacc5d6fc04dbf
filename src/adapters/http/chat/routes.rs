//! HTTP routes for the purchase chat endpoint.

use axum::{routing::post, Router};

use super::handlers::{post_purchase_message, ChatHandlers};

/// Creates the chat router, nested under `/api/chat`.
pub fn chat_routes(handlers: ChatHandlers) -> Router {
    Router::new()
        .route("/purchases", post(post_purchase_message))
        .with_state(handlers)
}
