//! ProductCatalog port - ranked product picks for a complete request.

use async_trait::async_trait;

use crate::domain::catalog::{CatalogFilter, RankedItem};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid catalog data: {0}")]
    InvalidData(String),
}

#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Zero to three pairwise-distinct picks labeled `cheapest`,
    /// `best_value` and `premium`.
    async fn pick_top3(&self, filter: &CatalogFilter) -> Result<Vec<RankedItem>, CatalogError>;
}
