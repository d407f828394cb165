//! Product entity for the catalog service.

use chrono::{DateTime, Utc};

/// A catalog product.
///
/// Field bounds (name 1-100 chars, price 0-1_000_000, amount 0-9_999) are
/// enforced at the transport boundary before a record is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub amount: i32,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a product. The store assigns the id.
///
/// Also used as the replacement payload for full updates.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: i32,
    pub amount: i32,
}

impl Product {
    pub fn new(id: i64, name: String, price: i32, amount: i32, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            price,
            amount,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let now = Utc::now();
        let product = Product::new(1, "pencil".to_string(), 300, 20, now);

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "pencil");
        assert_eq!(product.price, 300);
        assert_eq!(product.amount, 20);
        assert_eq!(product.created_at, now);
    }

    #[test]
    fn test_products_compare_by_value() {
        let now = Utc::now();
        let a = Product::new(7, "eraser".to_string(), 100, 5, now);
        let b = Product::new(7, "eraser".to_string(), 100, 5, now);

        assert_eq!(a, b);
    }
}
