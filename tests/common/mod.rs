#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use shortkey::api;
use shortkey::application::services::{ProductService, ShortenService};
use shortkey::config::StoreBackend;
use shortkey::infrastructure::persistence::{
    MemoryProductRepository, MemoryShortLinkRepository,
};
use shortkey::state::AppState;

/// Builds application state backed by fresh in-memory repositories.
pub fn create_test_state() -> AppState {
    let shorten_service = Arc::new(ShortenService::new(Arc::new(
        MemoryShortLinkRepository::new(),
    )));
    let product_service = Arc::new(ProductService::new(Arc::new(
        MemoryProductRepository::new(),
    )));

    AppState::new(shorten_service, product_service, StoreBackend::Memory)
}

/// Builds the full application router over fresh in-memory state.
pub fn app() -> Router {
    api::routes::routes().with_state(create_test_state())
}

/// Spins up a test server over the application router.
pub fn test_server() -> TestServer {
    TestServer::new(app()).unwrap()
}
