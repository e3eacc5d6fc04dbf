//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter for endpoint exposure; [`app_router`]
//! assembles them with the shared middleware stack.

pub mod chat;
mod error;
pub mod health;
pub mod profile;

pub use chat::{chat_routes, ChatHandlers};
pub use error::{domain_error_response, ErrorResponse};
pub use health::health_routes;
pub use profile::{profile_routes, ProfileHandlers};

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::{GetProfileHandler, HandleChatMessageHandler, TurnResolver};
use crate::config::ServerConfig;
use crate::ports::ProfileStore;

/// Handler state for every API area.
#[derive(Clone)]
pub struct ApiHandlers {
    pub chat: ChatHandlers,
    pub profiles: ProfileHandlers,
}

impl ApiHandlers {
    pub fn new(resolver: Arc<TurnResolver>, profiles: Arc<dyn ProfileStore>) -> Self {
        let handle_message = HandleChatMessageHandler::new(resolver, profiles.clone());
        let get_profile = GetProfileHandler::new(profiles);
        Self {
            chat: ChatHandlers::new(Arc::new(handle_message)),
            profiles: ProfileHandlers::new(Arc::new(get_profile)),
        }
    }
}

/// Creates the application router.
///
/// ```ignore
/// let app = app_router(handlers, &config.server);
/// axum::serve(listener, app).await?;
/// ```
pub fn app_router(handlers: ApiHandlers, server: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/api/chat", chat_routes(handlers.chat))
        .nest("/api/profiles", profile_routes(handlers.profiles))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Permissive when no origins are configured, otherwise exactly the listed ones.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS configured with {} origins", parsed.len());
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
