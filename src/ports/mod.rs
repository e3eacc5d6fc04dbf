//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the intake core and its collaborators. Adapters implement these ports.
//!
//! - `ProfileStore` - Per-user memory of resolved slots and history
//! - `ProductCatalog` - Ranked picks for a complete request
//! - `SearchLinkBuilder` - Marketplace search query and URL

mod product_catalog;
mod profile_store;
mod search_link_builder;

pub use product_catalog::{CatalogError, ProductCatalog};
pub use profile_store::{ProfileStore, ProfileStoreError};
pub use search_link_builder::{SearchLinkBuilder, SearchLinkError, SearchRequest};
