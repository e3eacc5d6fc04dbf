//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the intake core to the outside world:
//! - `catalog` - Static product catalog (built-in list or YAML file)
//! - `marketplace` - Amazon search link builder
//! - `profile` - In-memory and file-backed profile stores
//! - `http` - axum REST API

pub mod catalog;
pub mod http;
pub mod marketplace;
pub mod profile;

pub use catalog::StaticCatalog;
pub use marketplace::AmazonSearchLinkBuilder;
pub use profile::{FileProfileStore, InMemoryProfileStore};
