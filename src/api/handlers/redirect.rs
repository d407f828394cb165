//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{shortenUrlKey}`
///
/// Resolution atomically increments the link's redirect counter before the
/// response is built, so each successful redirect is counted exactly once.
///
/// # Errors
///
/// Returns 404 if the key is unknown.
pub async fn redirect_handler(
    Path(shorten_url_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.shorten_service.resolve(&shorten_url_key).await?;

    debug!(
        key = %link.key,
        redirect_count = link.redirect_count,
        "redirecting"
    );

    Ok(Redirect::temporary(&link.target_url))
}
