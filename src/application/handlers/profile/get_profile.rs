//! GetProfile - Query handler for a user's purchase profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::profile::PurchaseProfile;
use crate::ports::ProfileStore;

/// Query to read one purchase profile.
#[derive(Debug, Clone)]
pub struct GetProfileQuery {
    pub user_id: UserId,
}

/// Handler for reading profiles.
pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileStore>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, query: GetProfileQuery) -> Result<PurchaseProfile, DomainError> {
        match self.profiles.find(&query.user_id).await {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("No profile for user {}", query.user_id),
            )),
            Err(e) => {
                tracing::warn!(user_id = %query.user_id, "Profile read failed: {}", e);
                Err(DomainError::new(ErrorCode::StorageError, e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::intake::SlotSet;
    use crate::ports::ProfileStoreError;
    use async_trait::async_trait;

    struct MockProfileStore {
        profile: Option<PurchaseProfile>,
        should_fail: bool,
    }

    #[async_trait]
    impl ProfileStore for MockProfileStore {
        async fn load_last_known(
            &self,
            _user_id: &UserId,
        ) -> Result<Option<SlotSet>, ProfileStoreError> {
            unimplemented!()
        }

        async fn save_turn(
            &self,
            _user_id: &UserId,
            _resolved: &SlotSet,
            _message: &str,
            _reply: &str,
        ) -> Result<(), ProfileStoreError> {
            unimplemented!()
        }

        async fn find(&self, _user_id: &UserId) -> Result<Option<PurchaseProfile>, ProfileStoreError> {
            if self.should_fail {
                return Err(ProfileStoreError::IoError("disk gone".to_string()));
            }
            Ok(self.profile.clone())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("rider-7").unwrap()
    }

    #[tokio::test]
    async fn test_returns_existing_profile() {
        let profile = PurchaseProfile::new(test_user_id(), Timestamp::now());
        let handler = GetProfileHandler::new(Arc::new(MockProfileStore {
            profile: Some(profile.clone()),
            should_fail: false,
        }));

        let found = handler
            .handle(GetProfileQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap();

        assert_eq!(found, profile);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found() {
        let handler = GetProfileHandler::new(Arc::new(MockProfileStore {
            profile: None,
            should_fail: false,
        }));

        let err = handler
            .handle(GetProfileQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ProfileNotFound);
    }

    #[tokio::test]
    async fn test_store_failure_is_storage_error() {
        let handler = GetProfileHandler::new(Arc::new(MockProfileStore {
            profile: None,
            should_fail: true,
        }));

        let err = handler
            .handle(GetProfileQuery {
                user_id: test_user_id(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
    }
}
