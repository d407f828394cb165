//! Handlers for the short link creation and information endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::shorten::{
    ShortenUrlCreateRequest, ShortenUrlCreateResponse, ShortenUrlInformationResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted URL.
///
/// # Endpoint
///
/// `POST /shortenUrl`
///
/// # Request Body
///
/// ```json
/// { "originalUrl": "https://www.google.com/" }
/// ```
///
/// # Response
///
/// ```json
/// { "originalUrl": "https://www.google.com/", "shortenUrlKey": "a2Bx9kQm" }
/// ```
///
/// # Errors
///
/// Returns 400 if the URL is malformed.
/// Returns 500 if no free key could be allocated within the retry bound.
pub async fn shorten_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenUrlCreateRequest>,
) -> Result<Json<ShortenUrlCreateResponse>, AppError> {
    payload.validate()?;

    let link = state
        .shorten_service
        .create_short_link(payload.original_url)
        .await?;

    Ok(Json(link.into()))
}

/// Returns the stored information for a short link.
///
/// # Endpoint
///
/// `GET /shortenUrl/{shortenUrlKey}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://www.google.com/",
///   "shortenUrlKey": "a2Bx9kQm",
///   "redirectCount": 1
/// }
/// ```
///
/// # Errors
///
/// Returns 404 if the key is unknown.
pub async fn shorten_url_info_handler(
    Path(shorten_url_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ShortenUrlInformationResponse>, AppError> {
    let link = state.shorten_service.get_link_info(&shorten_url_key).await?;

    Ok(Json(link.into()))
}
