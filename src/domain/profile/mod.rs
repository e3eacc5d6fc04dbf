//! Purchase profile - per-user memory of resolved slots and past turns.

mod aggregate;
mod history;

pub use aggregate::PurchaseProfile;
pub use history::HistoryEntry;
