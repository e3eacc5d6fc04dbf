use serde::{Deserialize, Serialize};

use super::locale::Locale;
use super::slots::{SlotName, SlotSet};
use crate::domain::catalog::RankedItem;

/// Marketplace search query and URL for a complete request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
    pub query: String,
    pub url: String,
}

/// Everything produced for one inbound message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedTurn {
    pub locale: Locale,
    #[serde(flatten)]
    pub slots: SlotSet,
    pub missing_info: Vec<SlotName>,
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<RankedItem>>,
}
