//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Placeholder identity used when a caller does not say who they are.
pub const ANONYMOUS_USER: &str = "anonymous";

/// Identifier of the customer owning a purchase profile.
///
/// Any non-empty string is accepted; unauthenticated callers share the
/// [`ANONYMOUS_USER`] placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("user_id"));
        }
        Ok(Self(id))
    }

    /// The shared placeholder identity.
    pub fn anonymous() -> Self {
        Self(ANONYMOUS_USER.to_string())
    }

    /// Uses the given id when present and non-blank, the placeholder otherwise.
    pub fn or_anonymous(id: Option<&str>) -> Self {
        id.and_then(|raw| Self::new(raw).ok())
            .unwrap_or_else(Self::anonymous)
    }

    /// Returns true for the placeholder identity.
    pub fn is_anonymous(&self) -> bool {
        self.0 == ANONYMOUS_USER
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
