//! HTTP adapter for the purchase chat endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;
