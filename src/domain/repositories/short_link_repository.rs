//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short link storage.
///
/// The two mutation operations are required to be atomic: concurrent callers
/// racing on the same key must observe exactly one winning `insert_if_absent`,
/// and concurrent redirects must never lose a counter increment. This keeps
/// the allocator and resolver free of external locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryShortLinkRepository`] - DashMap-backed
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts the link if its key is free.
    ///
    /// Returns `Ok(true)` when the link was stored, `Ok(false)` when the key
    /// is already taken. Check and insert happen as one atomic operation; a
    /// `false` result writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, AppError>;

    /// Finds a link by its short key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_key(&self, key: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the redirect counter of the link under `key`.
    ///
    /// Returns the updated record, or `None` when no link exists for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn increment_redirect_count(&self, key: &str) -> Result<Option<ShortLink>, AppError>;
}
