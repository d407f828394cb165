//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// PostgreSQL repository for products.
///
/// Id assignment is delegated to the `BIGSERIAL` identity column via
/// `INSERT ... RETURNING`.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: i32,
    amount: i32,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            price: row.price,
            amount: row.amount,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, price, amount)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, amount, created_at
            "#,
        )
        .bind(&new_product.name)
        .bind(new_product.price)
        .bind(new_product.amount)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, amount, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, amount, created_at
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Product>, AppError> {
        // position() keeps plain substring semantics; LIKE would treat
        // % and _ in the fragment as wildcards.
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, price, amount, created_at
            FROM products
            WHERE position($1 IN name) > 0
            ORDER BY id
            "#,
        )
        .bind(fragment)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn update(&self, id: i64, fields: NewProduct) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $2, price = $3, amount = $4
            WHERE id = $1
            RETURNING id, name, price, amount, created_at
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.price)
        .bind(fields.amount)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() == 1)
    }
}
