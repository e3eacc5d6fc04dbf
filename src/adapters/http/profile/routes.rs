//! HTTP routes for profile endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_profile, ProfileHandlers};

/// Creates the profile router, nested under `/api/profiles`.
pub fn profile_routes(handlers: ProfileHandlers) -> Router {
    Router::new()
        .route("/:user_id", get(get_profile))
        .with_state(handlers)
}
