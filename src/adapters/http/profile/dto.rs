//! HTTP DTOs for profile endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::intake::SlotSet;
use crate::domain::profile::{HistoryEntry, PurchaseProfile};

/// Query string accepted by profile reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileQueryParams {
    #[serde(default)]
    pub locale: Option<String>,
}

/// A purchase profile as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub ok: bool,
    pub user_id: String,
    pub last_known: SlotSet,
    pub history: Vec<HistoryEntry>,
    pub turn_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PurchaseProfile> for ProfileResponse {
    fn from(profile: PurchaseProfile) -> Self {
        Self {
            ok: true,
            user_id: profile.user_id.to_string(),
            turn_count: profile.turn_count(),
            created_at: profile.created_at.to_rfc3339(),
            updated_at: profile.updated_at.to_rfc3339(),
            last_known: profile.last_known,
            history: profile.history,
        }
    }
}
