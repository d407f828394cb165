//! In-memory implementation of the short link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// Concurrent-map repository for short links.
///
/// DashMap's sharded locking gives the atomicity the trait demands without a
/// global lock: `entry()` holds the shard lock across the vacancy check and
/// the insert, and `get_mut()` holds it across the counter increment.
#[derive(Debug, Default)]
pub struct MemoryShortLinkRepository {
    links: DashMap<String, ShortLink>,
}

impl MemoryShortLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortLinkRepository for MemoryShortLinkRepository {
    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, AppError> {
        match self.links.entry(link.key.clone()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(link);
                Ok(true)
            }
        }
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(key).map(|entry| entry.clone()))
    }

    async fn increment_redirect_count(&self, key: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get_mut(key).map(|mut entry| {
            entry.redirect_count += 1;
            entry.clone()
        }))
    }
}
