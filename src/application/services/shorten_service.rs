//! Short link allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::key_generator::generate_key;
use serde_json::json;

/// Upper bound on key allocation attempts before giving up.
///
/// With a 56^8 keyspace the collision probability per draw is negligible for
/// small catalogs, so this is a defensive bound rather than a capacity
/// guarantee: hitting it means the keyspace or the store is saturated.
const MAX_KEY_RETRIES: usize = 5;

/// Key used by the health probe. Outside the generated alphabet on purpose,
/// so it can never shadow a live link.
const HEALTH_PROBE_KEY: &str = "00000000";

/// Service for allocating, resolving, and inspecting short links.
///
/// The repository is required to provide atomic `insert_if_absent` and
/// `increment_redirect_count` operations, so this service needs no locking
/// of its own under concurrent callers.
pub struct ShortenService {
    repository: Arc<dyn ShortLinkRepository>,
}

impl ShortenService {
    /// Creates a new shorten service.
    pub fn new(repository: Arc<dyn ShortLinkRepository>) -> Self {
        Self { repository }
    }

    /// Allocates a fresh key for `original_url` and persists the link.
    ///
    /// # Allocation
    ///
    /// Up to [`MAX_KEY_RETRIES`] attempts. Each attempt draws a random
    /// 8-character candidate and claims it with a single atomic
    /// insert-if-absent round-trip; a taken key costs one retry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyExhaustion`] when every attempt collides. No
    /// partial record is written in that case.
    pub async fn create_short_link(&self, original_url: String) -> Result<ShortLink, AppError> {
        for _ in 0..MAX_KEY_RETRIES {
            let link = ShortLink::new(generate_key(), original_url.clone());

            if self.repository.insert_if_absent(link.clone()).await? {
                return Ok(link);
            }
        }

        Err(AppError::key_exhaustion(
            "Could not allocate a free short key",
            json!({ "attempts": MAX_KEY_RETRIES }),
        ))
    }

    /// Resolves `key` to its target URL, recording one traversal.
    ///
    /// The redirect counter is incremented atomically at the store, so
    /// concurrent resolutions of the same key never lose an update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link exists for `key`.
    pub async fn resolve(&self, key: &str) -> Result<ShortLink, AppError> {
        self.repository
            .increment_redirect_count(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "key": key })))
    }

    /// Retrieves the link under `key` without touching its counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link exists for `key`.
    pub async fn get_link_info(&self, key: &str) -> Result<ShortLink, AppError> {
        self.repository
            .find_by_key(key)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "key": key })))
    }

    /// Reports whether the backing store answers lookups.
    pub async fn store_healthy(&self) -> bool {
        self.repository.find_by_key(HEALTH_PROBE_KEY).await.is_ok()
    }
}
