//! ProfileStore port - per-user purchase memory.
//!
//! Load and save are separate calls, so a load → resolve → save sequence is
//! not atomic. Two concurrent turns for the same user race and the last save
//! wins.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::intake::SlotSet;
use crate::domain::profile::PurchaseProfile;

/// Errors that can occur during profile storage operations
#[derive(Debug, thiserror::Error)]
pub enum ProfileStoreError {
    #[error("Failed to serialize profile: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize profile: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Profile store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Last-known slots for a user, `None` for a user never seen.
    async fn load_last_known(&self, user_id: &UserId) -> Result<Option<SlotSet>, ProfileStoreError>;

    /// Upserts the profile: overlays the resolved slots and appends one
    /// history entry.
    async fn save_turn(
        &self,
        user_id: &UserId,
        resolved: &SlotSet,
        message: &str,
        reply: &str,
    ) -> Result<(), ProfileStoreError>;

    /// Full profile, `None` when the user is unknown.
    async fn find(&self, user_id: &UserId) -> Result<Option<PurchaseProfile>, ProfileStoreError>;
}
