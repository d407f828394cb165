//! DTOs for the URL shortening endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlCreateRequest {
    /// The original URL to shorten (must be well-formed).
    #[validate(url(message = "Invalid URL format"))]
    pub original_url: String,
}

/// Response for a freshly created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlCreateResponse {
    pub original_url: String,
    pub shorten_url_key: String,
}

impl From<ShortLink> for ShortenUrlCreateResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.target_url,
            shorten_url_key: link.key,
        }
    }
}

/// Response for the link information endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenUrlInformationResponse {
    pub original_url: String,
    pub shorten_url_key: String,
    pub redirect_count: i64,
}

impl From<ShortLink> for ShortenUrlInformationResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            original_url: link.target_url,
            shorten_url_key: link.key,
            redirect_count: link.redirect_count,
        }
    }
}
