//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `intake` - Slot-filling core: classify, merge, gate, compose
//! - `catalog` - Product entries, filtering and the three-tier pick
//! - `profile` - Per-user purchase memory

pub mod catalog;
pub mod foundation;
pub mod intake;
pub mod profile;
