//! DTOs for the product catalog endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewProduct, Product};

/// Request body for creating or replacing a product.
#[derive(Debug, Deserialize, Validate)]
pub struct ProductPayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(range(min = 0, max = 1_000_000))]
    pub price: i32,

    #[validate(range(min = 0, max = 9_999))]
    pub amount: i32,
}

impl From<ProductPayload> for NewProduct {
    fn from(payload: ProductPayload) -> Self {
        NewProduct {
            name: payload.name,
            price: payload.price,
            amount: payload.amount,
        }
    }
}

/// Optional name filter for the product list endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    pub name: Option<String>,
}

/// A product as returned by the API.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: i32,
    pub amount: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            amount: product.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, price: i32, amount: i32) -> ProductPayload {
        ProductPayload {
            name: name.to_string(),
            price,
            amount,
        }
    }

    #[test]
    fn test_payload_within_bounds_is_valid() {
        assert!(payload("pencil", 300, 20).validate().is_ok());
    }

    #[test]
    fn test_payload_bounds_are_inclusive() {
        assert!(payload("p", 0, 0).validate().is_ok());
        assert!(payload(&"x".repeat(100), 1_000_000, 9_999).validate().is_ok());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        assert!(payload("", 300, 20).validate().is_err());
    }

    #[test]
    fn test_name_over_100_chars_is_invalid() {
        assert!(payload(&"x".repeat(101), 300, 20).validate().is_err());
    }

    #[test]
    fn test_price_over_limit_is_invalid() {
        assert!(payload("pencil", 1_000_001, 20).validate().is_err());
    }

    #[test]
    fn test_negative_price_is_invalid() {
        assert!(payload("pencil", -1, 20).validate().is_err());
    }

    #[test]
    fn test_amount_over_limit_is_invalid() {
        assert!(payload("pencil", 300, 10_000).validate().is_err());
    }

    #[test]
    fn test_negative_amount_is_invalid() {
        assert!(payload("pencil", 300, -1).validate().is_err());
    }
}
