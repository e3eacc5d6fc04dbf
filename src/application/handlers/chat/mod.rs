//! Chat handlers - one inbound purchase message per call.

mod handle_chat_message;
mod resolve_turn;

pub use handle_chat_message::{
    HandleChatMessageCommand, HandleChatMessageHandler, HandleChatMessageResult,
};
pub use resolve_turn::TurnResolver;
