//! In-memory implementation of the product repository.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::entities::{NewProduct, Product};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// Concurrent-map repository for products.
///
/// Ids come from an atomic sequence starting at 1, mirroring what a database
/// identity column would assign.
#[derive(Debug)]
pub struct MemoryProductRepository {
    products: DashMap<i64, Product>,
    sequence: AtomicI64,
}

impl MemoryProductRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            products: DashMap::new(),
            sequence: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        let product = Product::new(
            id,
            new_product.name,
            new_product.price,
            new_product.amount,
            Utc::now(),
        );

        self.products.insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.products.get(&id).map(|entry| entry.clone()))
    }

    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let mut products: Vec<Product> =
            self.products.iter().map(|entry| entry.clone()).collect();
        products.sort_by_key(|product| product.id);
        Ok(products)
    }

    async fn find_by_name_containing(&self, fragment: &str) -> Result<Vec<Product>, AppError> {
        let mut products: Vec<Product> = self
            .products
            .iter()
            .filter(|entry| entry.name.contains(fragment))
            .map(|entry| entry.clone())
            .collect();
        products.sort_by_key(|product| product.id);
        Ok(products)
    }

    async fn update(&self, id: i64, fields: NewProduct) -> Result<Option<Product>, AppError> {
        Ok(self.products.get_mut(&id).map(|mut entry| {
            entry.name = fields.name;
            entry.price = fields.price;
            entry.amount = fields.amount;
            entry.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pencil() -> NewProduct {
        NewProduct {
            name: "pencil".to_string(),
            price: 300,
            amount: 20,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = MemoryProductRepository::new();

        let first = repo.create(pencil()).await.unwrap();
        let second = repo.create(pencil()).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_then_find_by_id() {
        let repo = MemoryProductRepository::new();

        let created = repo.create(pencil()).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_unknown_id_is_none() {
        let repo = MemoryProductRepository::new();

        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = MemoryProductRepository::new();
        for name in ["pencil", "eraser", "ruler"] {
            repo.create(NewProduct {
                name: name.to_string(),
                price: 100,
                amount: 1,
            })
            .await
            .unwrap();
        }

        let products = repo.list().await.unwrap();

        let ids: Vec<i64> = products.iter().map(|product| product.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_find_by_name_containing() {
        let repo = MemoryProductRepository::new();
        for name in ["pencil", "pen", "eraser"] {
            repo.create(NewProduct {
                name: name.to_string(),
                price: 100,
                amount: 1,
            })
            .await
            .unwrap();
        }

        let matches = repo.find_by_name_containing("pen").await.unwrap();

        let names: Vec<&str> = matches.iter().map(|product| product.name.as_str()).collect();
        assert_eq!(names, vec!["pencil", "pen"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = MemoryProductRepository::new();
        let created = repo.create(pencil()).await.unwrap();

        let updated = repo
            .update(
                created.id,
                NewProduct {
                    name: "pencil".to_string(),
                    price: 350,
                    amount: 20,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price, 350);
        assert_eq!(
            repo.find_by_id(created.id).await.unwrap().unwrap().price,
            350
        );
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let repo = MemoryProductRepository::new();

        assert!(repo.update(42, pencil()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = MemoryProductRepository::new();
        let created = repo.create(pencil()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_false() {
        let repo = MemoryProductRepository::new();

        assert!(!repo.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleted_id_is_not_reused() {
        let repo = MemoryProductRepository::new();
        let first = repo.create(pencil()).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(pencil()).await.unwrap();

        assert_eq!(second.id, 2);
    }
}
