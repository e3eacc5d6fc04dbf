//! Product catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Product catalog configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog replacing the built-in product list
    #[serde(default)]
    pub path: Option<PathBuf>,
}
