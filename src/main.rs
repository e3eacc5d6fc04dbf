//! Rider Purchases HTTP server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use rider_purchases::adapters::http::{app_router, ApiHandlers};
use rider_purchases::adapters::{
    AmazonSearchLinkBuilder, FileProfileStore, InMemoryProfileStore, StaticCatalog,
};
use rider_purchases::application::TurnResolver;
use rider_purchases::config::{AppConfig, ServerConfig, StorageBackend, StorageConfig};
use rider_purchases::ports::ProfileStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    tracing::info!("Starting Rider Purchases v{}", env!("CARGO_PKG_VERSION"));

    let catalog = match &config.catalog.path {
        Some(path) => StaticCatalog::from_yaml_file(path).await?,
        None => StaticCatalog::builtin(),
    };
    let links = AmazonSearchLinkBuilder::from_config(&config.marketplace)?;
    let resolver = TurnResolver::new(Arc::new(catalog), Arc::new(links));

    let profiles = profile_store(&config.storage);
    let app = app_router(ApiHandlers::new(Arc::new(resolver), profiles), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn profile_store(config: &StorageConfig) -> Arc<dyn ProfileStore> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Profiles kept in memory");
            Arc::new(InMemoryProfileStore::new())
        }
        StorageBackend::File => {
            tracing::info!(data_dir = %config.data_dir.display(), "Profiles stored on disk");
            Arc::new(FileProfileStore::new(&config.data_dir))
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &ServerConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_level.as_str().into());

    let fmt_layer = if config.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
