//! Profile store adapters

mod filesystem;
mod in_memory;

pub use filesystem::FileProfileStore;
pub use in_memory::InMemoryProfileStore;
