//! PostgreSQL implementation of the short link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short links.
///
/// Uses the SQLx runtime query API with bound parameters. Atomicity comes
/// from the database itself: `ON CONFLICT DO NOTHING` for insert-if-absent
/// and a single `UPDATE ... RETURNING` for the counter increment.
pub struct PgShortLinkRepository {
    pool: Arc<PgPool>,
}

impl PgShortLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    key: String,
    target_url: String,
    redirect_count: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink {
            key: row.key,
            target_url: row.target_url,
            redirect_count: row.redirect_count,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ShortLinkRepository for PgShortLinkRepository {
    async fn insert_if_absent(&self, link: ShortLink) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_links (key, target_url, redirect_count, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (key) DO NOTHING
            "#,
        )
        .bind(&link.key)
        .bind(&link.target_url)
        .bind(link.redirect_count)
        .bind(link.created_at)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT key, target_url, redirect_count, created_at
            FROM short_links
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn increment_redirect_count(&self, key: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            UPDATE short_links
            SET redirect_count = redirect_count + 1
            WHERE key = $1
            RETURNING key, target_url, redirect_count, created_at
            "#,
        )
        .bind(key)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }
}
