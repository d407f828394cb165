//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{ProductService, ShortenService};
use crate::config::StoreBackend;

/// Application state shared across request handlers.
///
/// Services hold their repositories as trait objects, so the same state type
/// covers both the in-memory and the PostgreSQL backend.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub product_service: Arc<ProductService>,
    pub store_backend: StoreBackend,
}

impl AppState {
    /// Creates application state from constructed services.
    pub fn new(
        shorten_service: Arc<ShortenService>,
        product_service: Arc<ProductService>,
        store_backend: StoreBackend,
    ) -> Self {
        Self {
            shorten_service,
            product_service,
            store_backend,
        }
    }
}
