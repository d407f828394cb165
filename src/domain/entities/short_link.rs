//! Short link entity mapping a key to its original URL.

use chrono::{DateTime, Utc};

/// A shortened URL record.
///
/// The `key` is unique across all live records and never changes after
/// allocation. `redirect_count` is mutated only by the resolution path and
/// records are never deleted, so the counter is monotonically increasing.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub key: String,
    pub target_url: String,
    pub redirect_count: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a fresh record with a zero redirect count.
    pub fn new(key: String, target_url: String) -> Self {
        Self {
            key,
            target_url,
            redirect_count: 0,
            created_at: Utc::now(),
        }
    }
}
