//! Catalog reference data.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::intake::{BikeType, Category, ItemType, Usage};

/// Price/quality band of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Budget,
    Value,
    Premium,
}

impl QualityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::Budget => "budget",
            QualityTier::Value => "value",
            QualityTier::Premium => "premium",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only catalog product.
///
/// Empty tag lists mean the product is not restricted on that attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntry {
    pub id: String,
    pub category: Category,
    pub item_type: ItemType,
    pub brand: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quality_tier: QualityTier,
    #[serde(default)]
    pub usage_tags: Vec<Usage>,
    #[serde(default)]
    pub bike_type_tags: Vec<BikeType>,
    pub price: f64,
    pub currency: String,
    pub store: String,
    pub url: String,
}

/// Filter applied before tier picking. Absent fields do not filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFilter {
    pub category: Category,
    pub item_type: Option<ItemType>,
    pub usage: Option<Usage>,
    pub bike_type: Option<BikeType>,
}

impl CatalogFilter {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            item_type: None,
            usage: None,
            bike_type: None,
        }
    }

    pub fn with_item_type(mut self, item_type: Option<ItemType>) -> Self {
        self.item_type = item_type;
        self
    }

    pub fn with_usage(mut self, usage: Option<Usage>) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_bike_type(mut self, bike_type: Option<BikeType>) -> Self {
        self.bike_type = bike_type;
        self
    }

    /// True when the product passes every provided filter. Tags are only
    /// checked when the product carries some; `helmet-unknown` matches any
    /// helmet style.
    pub fn matches(&self, product: &ProductEntry) -> bool {
        if product.category != self.category {
            return false;
        }

        let item_ok = match self.item_type {
            Some(ItemType::HelmetUnknown) => product.item_type.is_helmet(),
            Some(item_type) => product.item_type == item_type,
            None => true,
        };

        let usage_ok = match self.usage {
            Some(usage) if !product.usage_tags.is_empty() => product.usage_tags.contains(&usage),
            _ => true,
        };

        let bike_ok = match self.bike_type {
            Some(bike) if !product.bike_type_tags.is_empty() => {
                product.bike_type_tags.contains(&bike)
            }
            _ => true,
        };

        item_ok && usage_ok && bike_ok
    }
}
