//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod profile;

pub use chat::{
    HandleChatMessageCommand, HandleChatMessageHandler, HandleChatMessageResult, TurnResolver,
};
pub use profile::{GetProfileHandler, GetProfileQuery};
