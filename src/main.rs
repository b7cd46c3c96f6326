//! bank_management - Bank Management Backend API
//!
//! Serves the sign-up and deposit flows over HTTP. Account state lives in an
//! external store reached through stored routines.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bank_management::api::{self, AppState};
use bank_management::config::{Config, StoreBackend};
use bank_management::db;
use bank_management::store::{AccountStore, InMemoryAccountStore, PgAccountStore};

/// Initialize tracing/logging
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bank_management=debug,tower_http=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.is_production());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    tracing::info!("Starting bank_management server");

    let (store, pool) = match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres store"))?;

            tracing::info!("Connecting to database...");
            let pool = db::connect(database_url, config.database_max_connections).await?;
            db::verify_connection(&pool).await?;

            if !db::check_schema(&pool).await? {
                tracing::error!("Account store routines are missing. Please install them.");
                return Err(anyhow::anyhow!("Database schema incomplete"));
            }

            tracing::info!("Database connected successfully");
            let store: Arc<dyn AccountStore> = Arc::new(PgAccountStore::new(pool.clone()));
            (store, Some(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory account store; nothing will be persisted");
            let store: Arc<dyn AccountStore> = Arc::new(InMemoryAccountStore::new());
            (store, None)
        }
    };

    let app = api::build_router(AppState::new(store));

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down...");
    if let Some(pool) = pool {
        pool.close().await;
        tracing::info!("Database connections closed");
    }
    tracing::info!("Goodbye!");

    Ok(())
}

/// Shutdown signal handler for graceful shutdown
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
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
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        },
    }
}
