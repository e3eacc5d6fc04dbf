//! Profile query handlers.

mod get_profile;

pub use get_profile::{GetProfileHandler, GetProfileQuery};
