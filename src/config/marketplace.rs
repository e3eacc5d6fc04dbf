//! Marketplace search link configuration

use reqwest::Url;
use serde::Deserialize;

use super::error::ValidationError;

/// Marketplace search link configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceConfig {
    /// Search endpoint the query is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Affiliate/associate tag added as the `tag` query parameter
    #[serde(default)]
    pub associate_tag: Option<String>,
}

impl MarketplaceConfig {
    /// Associate tag, ignoring blank values
    pub fn tag(&self) -> Option<&str> {
        self.associate_tag
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Validate marketplace configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = Url::parse(&self.base_url)
            .map_err(|_| ValidationError::InvalidMarketplaceUrl(self.base_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidMarketplaceUrl(
                self.base_url.clone(),
            ));
        }
        Ok(())
    }
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            associate_tag: None,
        }
    }
}

fn default_base_url() -> String {
    "https://www.amazon.com/s".to_string()
}
