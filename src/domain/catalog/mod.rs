//! Product catalog types and the three-tier pick.

mod product;
mod ranking;

pub use product::{CatalogFilter, ProductEntry, QualityTier};
pub use ranking::{pick_top3, RankedItem};
