//! Product CRUD service.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for creating, reading, updating, and deleting products.
///
/// Field constraints are enforced at the transport boundary before input
/// reaches this service; no business rule beyond field bounds exists here.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Adds a product and returns it with its store-assigned id.
    pub async fn add(&self, new_product: NewProduct) -> Result<Product, AppError> {
        self.repository.create(new_product).await
    }

    /// Retrieves a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product exists for `id`.
    pub async fn find_by_id(&self, id: i64) -> Result<Product, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    /// Lists all products.
    pub async fn find_all(&self) -> Result<Vec<Product>, AppError> {
        self.repository.list().await
    }

    /// Lists products whose name contains `fragment`.
    pub async fn find_by_name_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<Product>, AppError> {
        self.repository.find_by_name_containing(fragment).await
    }

    /// Replaces the fields of the product under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product exists for `id`.
    pub async fn update(&self, id: i64, fields: NewProduct) -> Result<Product, AppError> {
        self.repository
            .update(id, fields)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({ "id": id })))
    }

    /// Deletes the product under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no product exists for `id`.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Product not found",
                json!({ "id": id }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProductRepository;
    use chrono::Utc;

    fn pencil(id: i64) -> Product {
        Product::new(id, "pencil".to_string(), 300, 20, Utc::now())
    }

    #[tokio::test]
    async fn test_add_returns_assigned_id() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_create()
            .withf(|new| new.name == "pencil" && new.price == 300 && new.amount == 20)
            .times(1)
            .returning(|_| Ok(pencil(1)));

        let service = ProductService::new(Arc::new(mock_repo));

        let product = service
            .add(NewProduct {
                name: "pencil".to_string(),
                price: 300,
                amount: 20,
            })
            .await
            .unwrap();

        assert_eq!(product.id, 1);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service.find_by_id(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo.expect_update().times(1).returning(|_, _| Ok(None));

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service
            .update(
                42,
                NewProduct {
                    name: "pencil".to_string(),
                    price: 350,
                    amount: 20,
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ProductService::new(Arc::new(mock_repo));

        let result = service.delete(42).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_by_name_containing_delegates() {
        let mut mock_repo = MockProductRepository::new();

        mock_repo
            .expect_find_by_name_containing()
            .withf(|fragment| fragment == "pen")
            .times(1)
            .returning(|_| Ok(vec![pencil(1)]));

        let service = ProductService::new(Arc::new(mock_repo));

        let products = service.find_by_name_containing("pen").await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "pencil");
    }
}
