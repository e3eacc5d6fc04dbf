use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::intake::{Category, ItemType};

/// One past exchange. History is append-only and never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub message: String,
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<ItemType>,
    pub at: Timestamp,
}

impl HistoryEntry {
    pub fn new(
        message: impl Into<String>,
        reply: impl Into<String>,
        category: Option<Category>,
        item_type: Option<ItemType>,
        at: Timestamp,
    ) -> Self {
        Self {
            message: message.into(),
            reply: reply.into(),
            category,
            item_type,
            at,
        }
    }
}
