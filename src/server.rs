//! HTTP server initialization and runtime setup.
//!
//! Builds the repository stack for the configured store backend, wires the
//! services, and runs the Axum server.

use crate::application::services::{ProductService, ShortenService};
use crate::config::{Config, StoreBackend};
use crate::infrastructure::persistence::{
    MemoryProductRepository, MemoryShortLinkRepository, PgProductRepository,
    PgShortLinkRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The configured store backend (in-memory maps, or a PostgreSQL pool with
///   migrations applied)
/// - Application services and shared state
/// - The Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Builds application state for the configured store backend.
async fn build_state(config: &Config) -> Result<AppState> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Store backend: in-memory");

            let shorten_service = Arc::new(ShortenService::new(Arc::new(
                MemoryShortLinkRepository::new(),
            )));
            let product_service = Arc::new(ProductService::new(Arc::new(
                MemoryProductRepository::new(),
            )));

            Ok(AppState::new(
                shorten_service,
                product_service,
                StoreBackend::Memory,
            ))
        }
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres backend")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            let pool = Arc::new(pool);
            let shorten_service = Arc::new(ShortenService::new(Arc::new(
                PgShortLinkRepository::new(pool.clone()),
            )));
            let product_service = Arc::new(ProductService::new(Arc::new(
                PgProductRepository::new(pool),
            )));

            Ok(AppState::new(
                shorten_service,
                product_service,
                StoreBackend::Postgres,
            ))
        }
    }
}
