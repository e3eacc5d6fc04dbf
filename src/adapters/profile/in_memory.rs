//! In-Memory Profile Store Adapter
//!
//! Keeps purchase profiles in a process-local map. Used for development and
//! tests; contents are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::intake::SlotSet;
use crate::domain::profile::PurchaseProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: Arc<RwLock<HashMap<UserId, PurchaseProfile>>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn load_last_known(&self, user_id: &UserId) -> Result<Option<SlotSet>, ProfileStoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).map(|p| p.last_known.clone()))
    }

    async fn save_turn(
        &self,
        user_id: &UserId,
        resolved: &SlotSet,
        message: &str,
        reply: &str,
    ) -> Result<(), ProfileStoreError> {
        let now = Timestamp::now();
        let mut profiles = self.profiles.write().await;
        profiles
            .entry(user_id.clone())
            .or_insert_with(|| PurchaseProfile::new(user_id.clone(), now))
            .record_turn(resolved, message, reply, now);
        Ok(())
    }

    async fn find(&self, user_id: &UserId) -> Result<Option<PurchaseProfile>, ProfileStoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(user_id).cloned())
    }
}
