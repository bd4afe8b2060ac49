use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use domain::store::{ContentStore, SessionStore};
use persistence::{MemoryContentStore, MemorySessionStore, PgContentStore, PgSessionStore};
use showcase_api::{
    app,
    config::{Config, StorageBackend},
    middleware,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load().context("Failed to load configuration")?;

    middleware::logging::init_logging(&config.logging)
        .context("Failed to initialize logging")?;
    middleware::init_metrics().context("Failed to initialize metrics")?;

    info!("Starting Showcase API v{}", env!("CARGO_PKG_VERSION"));

    let (content, sessions) = match config.storage.backend {
        StorageBackend::Postgres => {
            let db_config: persistence::db::DatabaseConfig = (&config.database).into();
            let pool = persistence::db::create_pool(&db_config).await?;

            info!("Running database migrations...");
            persistence::db::run_migrations(&pool).await?;
            info!("Migrations completed");

            let content: Arc<dyn ContentStore> = Arc::new(PgContentStore::new(pool.clone()));
            let sessions: Arc<dyn SessionStore> = Arc::new(PgSessionStore::new(pool));
            (content, sessions)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; content is lost on restart");
            let content: Arc<dyn ContentStore> = Arc::new(MemoryContentStore::new());
            let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
            (content, sessions)
        }
    };

    let addr = config.socket_addr()?;
    let app = app::create_app(config, content, sessions);

    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
