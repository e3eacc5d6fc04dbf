//! SearchLinkBuilder port - marketplace search query and URL.

use async_trait::async_trait;

use crate::domain::intake::{BikeType, Category, ItemType, Locale, SearchLink, Usage};

#[derive(Debug, thiserror::Error)]
pub enum SearchLinkError {
    #[error("Invalid marketplace URL: {0}")]
    InvalidUrl(String),

    #[error("Search link builder unavailable: {0}")]
    Unavailable(String),
}

/// Resolved attributes a search link is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub category: Category,
    pub item_type: Option<ItemType>,
    pub usage: Option<Usage>,
    pub bike_type: Option<BikeType>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub part_name: Option<String>,
    pub gear_brand: Option<String>,
    pub locale: Locale,
}

#[async_trait]
pub trait SearchLinkBuilder: Send + Sync {
    async fn build_search_link(&self, request: &SearchRequest) -> Result<SearchLink, SearchLinkError>;
}
