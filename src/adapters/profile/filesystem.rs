//! Filesystem storage adapter for purchase profiles

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::intake::SlotSet;
use crate::domain::profile::PurchaseProfile;
use crate::ports::{ProfileStore, ProfileStoreError};

/// Filesystem-based profile store
///
/// One JSON document per user: {base_dir}/profiles/{encoded user id}.json.
/// User ids are arbitrary strings, so every byte outside `[A-Za-z0-9_-]`
/// is written as `%XX` in the file name.
pub struct FileProfileStore {
    base_dir: PathBuf,
}

impl FileProfileStore {
    /// Create new filesystem store with base directory
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    fn profiles_dir(&self) -> PathBuf {
        self.base_dir.join("profiles")
    }

    /// Get full path to a user's profile document
    fn get_file_path(&self, user_id: &UserId) -> PathBuf {
        self.profiles_dir()
            .join(format!("{}.json", encode_file_stem(user_id.as_str())))
    }

    async fn read_profile(&self, user_id: &UserId) -> Result<Option<PurchaseProfile>, ProfileStoreError> {
        let file_path = self.get_file_path(user_id);

        let raw = match fs::read_to_string(&file_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ProfileStoreError::IoError(format!(
                    "Failed to read {}: {}",
                    file_path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| ProfileStoreError::DeserializationFailed(e.to_string()))
    }

    async fn write_profile(&self, profile: &PurchaseProfile) -> Result<(), ProfileStoreError> {
        let file_path = self.get_file_path(&profile.user_id);

        fs::create_dir_all(self.profiles_dir())
            .await
            .map_err(|e| ProfileStoreError::IoError(format!("Failed to create directory: {}", e)))?;

        let content = serde_json::to_string_pretty(profile)
            .map_err(|e| ProfileStoreError::SerializationFailed(e.to_string()))?;

        // Write to a unique temporary file, then rename over the document
        let temp_path = file_path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        fs::write(&temp_path, content).await.map_err(|e| {
            ProfileStoreError::IoError(format!("Failed to write temporary file: {}", e))
        })?;

        if let Err(e) = fs::rename(&temp_path, &file_path).await {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                tracing::warn!(
                    path = %temp_path.display(),
                    error = %cleanup,
                    "Failed to remove temporary profile file"
                );
            }
            return Err(ProfileStoreError::IoError(format!(
                "Failed to rename file: {}",
                e
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ProfileStore for FileProfileStore {
    async fn load_last_known(&self, user_id: &UserId) -> Result<Option<SlotSet>, ProfileStoreError> {
        Ok(self.read_profile(user_id).await?.map(|p| p.last_known))
    }

    async fn save_turn(
        &self,
        user_id: &UserId,
        resolved: &SlotSet,
        message: &str,
        reply: &str,
    ) -> Result<(), ProfileStoreError> {
        let now = Timestamp::now();
        let mut profile = self
            .read_profile(user_id)
            .await?
            .unwrap_or_else(|| PurchaseProfile::new(user_id.clone(), now));

        profile.record_turn(resolved, message, reply, now);
        self.write_profile(&profile).await
    }

    async fn find(&self, user_id: &UserId) -> Result<Option<PurchaseProfile>, ProfileStoreError> {
        self.read_profile(user_id).await
    }
}

fn encode_file_stem(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}
