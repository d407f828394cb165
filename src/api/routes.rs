//! API route configuration.

use crate::api::handlers::{
    create_product_handler, delete_product_handler, find_product_handler, health_handler,
    list_products_handler, redirect_handler, shorten_url_handler, shorten_url_info_handler,
    update_product_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get, routing::post};

/// All application routes.
///
/// # Endpoints
///
/// - `POST   /shortenUrl`                  - Create a short link
/// - `GET    /shortenUrl/{shortenUrlKey}`  - Short link information
/// - `GET    /{shortenUrlKey}`             - Redirect to the original URL
/// - `POST   /products`                    - Create a product
/// - `GET    /products`                    - List products (optional `?name=` filter)
/// - `GET    /products/{id}`               - Retrieve a product
/// - `PUT    /products/{id}`               - Replace a product
/// - `DELETE /products/{id}`               - Delete a product
/// - `GET    /health`                      - Health check
///
/// Static segments win over the root-level `{shortenUrlKey}` capture, so
/// `/health`, `/products`, and `/shortenUrl` are never shadowed.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shortenUrl", post(shorten_url_handler))
        .route("/shortenUrl/{shortenUrlKey}", get(shorten_url_info_handler))
        .route(
            "/products",
            post(create_product_handler).get(list_products_handler),
        )
        .route(
            "/products/{id}",
            get(find_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route("/health", get(health_handler))
        .route("/{shortenUrlKey}", get(redirect_handler))
}
