//! Business logic services for the application layer.

pub mod product_service;
pub mod shorten_service;

pub use product_service::ProductService;
pub use shorten_service::ShortenService;
