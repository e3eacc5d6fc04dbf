//! Amazon search link builder.
//!
//! Builds a plain-English search phrase from the resolved request and turns it
//! into `<base_url>?k=<query>[&tag=<associate tag>]`. No marketplace API is
//! called.

use async_trait::async_trait;
use reqwest::Url;

use crate::config::MarketplaceConfig;
use crate::domain::intake::{BikeType, Category, ItemType, SearchLink, Usage};
use crate::ports::{SearchLinkBuilder, SearchLinkError, SearchRequest};

const FALLBACK_QUERY: &str = "motorcycle";

#[derive(Debug, Clone)]
pub struct AmazonSearchLinkBuilder {
    base_url: Url,
    tag: Option<String>,
}

impl AmazonSearchLinkBuilder {
    pub fn new(base_url: &str, tag: Option<String>) -> Result<Self, SearchLinkError> {
        let base_url =
            Url::parse(base_url).map_err(|e| SearchLinkError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let tag = tag.map(|t| t.trim().to_string()).filter(|t| !t.is_empty());
        Ok(Self { base_url, tag })
    }

    pub fn from_config(config: &MarketplaceConfig) -> Result<Self, SearchLinkError> {
        Self::new(&config.base_url, config.tag().map(str::to_string))
    }

    /// Search URL for an already assembled query.
    pub fn url_for(&self, query: &str) -> String {
        let mut url = self.base_url.clone();
        {
            let mut params = url.query_pairs_mut();
            params.append_pair("k", query);
            if let Some(tag) = &self.tag {
                params.append_pair("tag", tag);
            }
        }
        url.into()
    }
}

impl Default for AmazonSearchLinkBuilder {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://www.amazon.com/s").expect("static URL is valid"),
            tag: None,
        }
    }
}

#[async_trait]
impl SearchLinkBuilder for AmazonSearchLinkBuilder {
    async fn build_search_link(&self, request: &SearchRequest) -> Result<SearchLink, SearchLinkError> {
        let query = build_query(request);
        let url = self.url_for(&query);
        Ok(SearchLink { query, url })
    }
}

/// Marketplace search phrase for a resolved request.
///
/// Order: product phrase, bike brand, model, year, bike phrase, usage phrase.
/// The phrase is English regardless of the reply locale.
pub fn build_query(request: &SearchRequest) -> String {
    let mut parts: Vec<&str> = Vec::new();

    match request.category {
        Category::Safety => {
            parts.push(gear_phrase(request.item_type));
            push_text(&mut parts, request.gear_brand.as_deref());
        }
        Category::SparePart => {
            parts.push("motorcycle spare part");
            push_text(&mut parts, request.part_name.as_deref());
        }
        Category::Accessory => {
            parts.push("motorcycle accessory");
            push_text(&mut parts, request.part_name.as_deref());
        }
        Category::None => {}
    }

    push_text(&mut parts, request.brand.as_deref());
    push_text(&mut parts, request.model.as_deref());
    push_text(&mut parts, request.year.as_deref());

    if let Some(bike_type) = request.bike_type {
        parts.push(bike_phrase(bike_type));
    }
    if let Some(usage) = request.usage {
        parts.push(usage_phrase(usage));
    }

    if parts.is_empty() {
        return FALLBACK_QUERY.to_string();
    }
    parts.join(" ")
}

fn push_text<'a>(parts: &mut Vec<&'a str>, value: Option<&'a str>) {
    if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
        parts.push(v);
    }
}

fn gear_phrase(item_type: Option<ItemType>) -> &'static str {
    match item_type {
        Some(t) if t.is_helmet() => "motorcycle helmet",
        Some(ItemType::Jacket) => "motorcycle jacket",
        Some(ItemType::Gloves) => "motorcycle gloves",
        Some(ItemType::Boots) => "motorcycle boots",
        _ => "motorcycle gear",
    }
}

fn bike_phrase(bike_type: BikeType) -> &'static str {
    match bike_type {
        BikeType::Sport => "sport bike",
        BikeType::Cruiser => "cruiser",
        BikeType::Scooter => "scooter",
        BikeType::Adventure => "adventure bike",
    }
}

fn usage_phrase(usage: Usage) -> &'static str {
    match usage {
        Usage::City => "city riding",
        Usage::Touring => "touring",
        Usage::Adventure => "adventure / offroad",
    }
}
