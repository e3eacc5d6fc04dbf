//! HandleChatMessage - Command handler for one inbound chat message.
//!
//! Validate → load memory → resolve → persist. The profile store is
//! optional at runtime: a failed load means an empty memory and a failed
//! save is logged, neither fails the turn.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::intake::{validate_message, Locale, ResolvedTurn, SlotSet};
use crate::ports::ProfileStore;

use super::TurnResolver;

/// Command carrying one customer message.
#[derive(Debug, Clone)]
pub struct HandleChatMessageCommand {
    pub user_id: UserId,
    pub message: String,
    pub locale: Locale,
    /// Slots supplied alongside the message, bypassing classification.
    pub context: SlotSet,
}

/// Result of a handled message.
#[derive(Debug, Clone)]
pub struct HandleChatMessageResult {
    pub user_id: UserId,
    pub turn: ResolvedTurn,
}

pub struct HandleChatMessageHandler {
    resolver: Arc<TurnResolver>,
    profiles: Arc<dyn ProfileStore>,
}

impl HandleChatMessageHandler {
    pub fn new(resolver: Arc<TurnResolver>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self { resolver, profiles }
    }

    pub async fn handle(
        &self,
        cmd: HandleChatMessageCommand,
    ) -> Result<HandleChatMessageResult, DomainError> {
        // 1. Reject before touching memory or classification
        validate_message(&cmd.message)?;

        // 2. Load memory, empty when the store is unavailable
        let memory = match self.profiles.load_last_known(&cmd.user_id).await {
            Ok(memory) => memory.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(user_id = %cmd.user_id, "Profile load failed, using empty memory: {}", e);
                SlotSet::new()
            }
        };

        // 3. Resolve; a panic becomes an internal error
        let resolution = AssertUnwindSafe(self.resolver.resolve(
            &cmd.message,
            cmd.locale,
            &cmd.context,
            &memory,
        ))
        .catch_unwind()
        .await;

        let turn = match resolution {
            Ok(result) => result?,
            Err(_) => {
                tracing::error!(user_id = %cmd.user_id, "Turn resolution panicked");
                return Err(DomainError::internal("Turn resolution failed"));
            }
        };

        tracing::info!(
            user_id = %cmd.user_id,
            category = %turn.slots.category_or_none(),
            missing = turn.missing_info.len(),
            "Resolved chat turn"
        );

        // 4. Persist, last writer wins
        if let Err(e) = self
            .profiles
            .save_turn(&cmd.user_id, &turn.slots, &cmd.message, &turn.reply)
            .await
        {
            tracing::warn!(user_id = %cmd.user_id, "Profile save failed: {}", e);
        }

        Ok(HandleChatMessageResult {
            user_id: cmd.user_id,
            turn,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogFilter, RankedItem};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::intake::{BikeType, Category, ItemType, SearchLink, Usage};
    use crate::domain::profile::PurchaseProfile;
    use crate::ports::{
        CatalogError, ProductCatalog, ProfileStoreError, SearchLinkBuilder, SearchLinkError,
        SearchRequest,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProfileStore {
        memory: Option<SlotSet>,
        should_fail: bool,
        saved: Mutex<Vec<(SlotSet, String)>>,
    }

    impl MockProfileStore {
        fn new() -> Self {
            Self {
                memory: None,
                should_fail: false,
                saved: Mutex::new(Vec::new()),
            }
        }

        fn with_memory(mut self, memory: SlotSet) -> Self {
            self.memory = Some(memory);
            self
        }

        fn failing() -> Self {
            Self {
                should_fail: true,
                ..Self::new()
            }
        }
    }

    #[async_trait]
    impl ProfileStore for MockProfileStore {
        async fn load_last_known(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<SlotSet>, ProfileStoreError> {
            if self.should_fail {
                return Err(ProfileStoreError::Unavailable("down".to_string()));
            }
            Ok(self.memory.clone())
        }

        async fn save_turn(
            &self,
            _user_id: &UserId,
            resolved: &SlotSet,
            message: &str,
            _reply: &str,
        ) -> Result<(), ProfileStoreError> {
            if self.should_fail {
                return Err(ProfileStoreError::Unavailable("down".to_string()));
            }
            self.saved
                .lock()
                .unwrap()
                .push((resolved.clone(), message.to_string()));
            Ok(())
        }

        async fn find(&self, _user_id: &UserId) -> Result<Option<PurchaseProfile>, ProfileStoreError> {
            Ok(None)
        }
    }

    struct EmptyCatalog;

    #[async_trait]
    impl ProductCatalog for EmptyCatalog {
        async fn pick_top3(&self, _filter: &CatalogFilter) -> Result<Vec<RankedItem>, CatalogError> {
            Ok(Vec::new())
        }
    }

    struct PanickingCatalog;

    #[async_trait]
    impl ProductCatalog for PanickingCatalog {
        async fn pick_top3(&self, _filter: &CatalogFilter) -> Result<Vec<RankedItem>, CatalogError> {
            panic!("catalog exploded");
        }
    }

    struct StubLinks;

    #[async_trait]
    impl SearchLinkBuilder for StubLinks {
        async fn build_search_link(
            &self,
            _request: &SearchRequest,
        ) -> Result<SearchLink, SearchLinkError> {
            Ok(SearchLink {
                query: "motorcycle".to_string(),
                url: "https://search.test/s?k=motorcycle".to_string(),
            })
        }
    }

    fn handler_with(
        catalog: Arc<dyn ProductCatalog>,
        profiles: Arc<MockProfileStore>,
    ) -> HandleChatMessageHandler {
        let resolver = Arc::new(TurnResolver::new(catalog, Arc::new(StubLinks)));
        HandleChatMessageHandler::new(resolver, profiles)
    }

    fn command(message: &str) -> HandleChatMessageCommand {
        HandleChatMessageCommand {
            user_id: UserId::new("rider-1").unwrap(),
            message: message.to_string(),
            locale: Locale::En,
            context: SlotSet::new(),
        }
    }

    #[tokio::test]
    async fn test_turn_is_persisted() {
        let profiles = Arc::new(MockProfileStore::new());
        let handler = handler_with(Arc::new(EmptyCatalog), profiles.clone());

        let result = handler.handle(command("jacket")).await.unwrap();

        assert_eq!(result.turn.slots.item_type, Some(ItemType::Jacket));
        let saved = profiles.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0.item_type, Some(ItemType::Jacket));
        assert_eq!(saved[0].1, "jacket");
    }

    #[tokio::test]
    async fn test_memory_is_merged() {
        let memory = SlotSet {
            category: Some(Category::Safety),
            item_type: Some(ItemType::Boots),
            bike_type: Some(BikeType::Sport),
            ..Default::default()
        };
        let profiles = Arc::new(MockProfileStore::new().with_memory(memory));
        let handler = handler_with(Arc::new(EmptyCatalog), profiles);

        let result = handler.handle(command("for touring")).await.unwrap();

        assert_eq!(result.turn.slots.item_type, Some(ItemType::Boots));
        assert_eq!(result.turn.slots.usage, Some(Usage::Touring));
        assert!(result.turn.missing_info.is_empty());
    }

    #[tokio::test]
    async fn test_empty_message_is_validation_error() {
        let profiles = Arc::new(MockProfileStore::new());
        let handler = handler_with(Arc::new(EmptyCatalog), profiles.clone());

        let err = handler.handle(command("")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(profiles.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_outage_does_not_fail_turn() {
        let profiles = Arc::new(MockProfileStore::failing());
        let handler = handler_with(Arc::new(EmptyCatalog), profiles);

        let result = handler.handle(command("helmet")).await.unwrap();

        assert_eq!(result.turn.slots.item_type, Some(ItemType::HelmetUnknown));
        assert!(!result.turn.missing_info.is_empty());
    }

    #[tokio::test]
    async fn test_panic_becomes_internal_error() {
        let profiles = Arc::new(MockProfileStore::new());
        let handler = handler_with(Arc::new(PanickingCatalog), profiles.clone());

        let err = handler
            .handle(command("full face helmet for city on a sport bike"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InternalError);
        assert!(profiles.saved.lock().unwrap().is_empty());
    }
}
