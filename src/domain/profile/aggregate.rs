//! PurchaseProfile aggregate.

use serde::{Deserialize, Serialize};

use super::HistoryEntry;
use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::intake::SlotSet;

/// Per-user memory across turns.
///
/// Created on the first turn of an unseen user. Each turn overwrites a
/// remembered slot only when the turn resolved a value for it, and appends
/// one history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseProfile {
    pub user_id: UserId,
    #[serde(default)]
    pub last_known: SlotSet,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl PurchaseProfile {
    pub fn new(user_id: UserId, now: Timestamp) -> Self {
        Self {
            user_id,
            last_known: SlotSet::new(),
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies one resolved turn.
    pub fn record_turn(&mut self, resolved: &SlotSet, message: &str, reply: &str, now: Timestamp) {
        self.last_known.overlay(resolved);
        self.history.push(HistoryEntry::new(
            message,
            reply,
            resolved.category,
            resolved.item_type,
            now,
        ));
        self.updated_at = now;
    }

    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}
