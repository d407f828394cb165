//! Repository trait for product data access.

use crate::domain::entities::{NewProduct, Product};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing catalog products.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryProductRepository`] - DashMap-backed
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a product, assigning the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Lists all products ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    /// Lists products whose name contains `fragment`, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Product>, AppError>;

    /// Replaces the mutable fields of the product under `id`.
    ///
    /// Returns the updated record, or `None` when no product exists for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn update(&self, id: i64, fields: NewProduct) -> Result<Option<Product>, AppError>;

    /// Deletes the product under `id`.
    ///
    /// Returns `true` when a record was removed, `false` when none existed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
