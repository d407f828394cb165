//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shortenUrl`, `GET /shortenUrl/{key}` - Shortening service (public)
//! - `GET  /{key}`                               - Short link redirect (public)
//! - `/products`, `/products/{id}`               - Product catalog (public)
//! - `GET  /health`                              - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
