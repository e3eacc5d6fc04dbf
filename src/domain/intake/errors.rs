use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Reasons a turn is rejected before classification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("message is required")]
    MissingMessage,

    #[error("message must be a string")]
    NotAString,

    #[error("message cannot be blank")]
    BlankMessage,
}

impl From<IntakeError> for DomainError {
    fn from(err: IntakeError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string()).with_detail("field", "message")
    }
}

/// Returns the trimmed message, rejecting blank input.
pub fn validate_message(raw: &str) -> Result<&str, IntakeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IntakeError::BlankMessage);
    }
    Ok(trimmed)
}
