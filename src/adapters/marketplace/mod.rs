//! Marketplace search link adapters

mod amazon_link;

pub use amazon_link::{build_query, AmazonSearchLinkBuilder};
