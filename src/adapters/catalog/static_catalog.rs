//! Static product catalog adapter.
//!
//! Serves the built-in product list, or a YAML file of the form
//! `products: [ ... ]` that replaces it entirely.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use super::builtin;
use crate::domain::catalog::{pick_top3, CatalogFilter, ProductEntry, RankedItem};
use crate::ports::{CatalogError, ProductCatalog};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    products: Vec<ProductEntry>,
}

/// Read-only, in-process product catalog.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<ProductEntry>,
}

impl StaticCatalog {
    pub fn new(products: Vec<ProductEntry>) -> Self {
        Self { products }
    }

    /// The built-in product list.
    pub fn builtin() -> Self {
        Self::new(builtin::products())
    }

    /// Parses a YAML catalog document.
    pub fn from_yaml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_yaml::from_str(raw).map_err(|e| CatalogError::InvalidData(e.to_string()))?;

        for product in &file.products {
            if product.price.is_nan() || product.price < 0.0 {
                return Err(CatalogError::InvalidData(format!(
                    "product {} has an invalid price",
                    product.id
                )));
            }
        }

        Ok(Self::new(file.products))
    }

    /// Loads a YAML catalog file.
    pub async fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).await.map_err(|e| {
            CatalogError::Unavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_yaml_str(&raw)?;
        tracing::info!(path = %path.display(), products = catalog.products.len(), "Loaded product catalog");
        Ok(catalog)
    }

    pub fn products(&self) -> &[ProductEntry] {
        &self.products
    }

    /// Products passing the filter, in catalog order.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<ProductEntry> {
        self.products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[async_trait]
impl ProductCatalog for StaticCatalog {
    async fn pick_top3(&self, filter: &CatalogFilter) -> Result<Vec<RankedItem>, CatalogError> {
        Ok(pick_top3(&self.filter(filter)))
    }
}
