//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access behind the Repository pattern. Concrete
//! implementations live in `crate::infrastructure::persistence`; mock
//! implementations are auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ShortLinkRepository`] - Short link allocation and resolution
//! - [`ProductRepository`] - Product CRUD operations

pub mod product_repository;
pub mod short_link_repository;

pub use product_repository::ProductRepository;
pub use short_link_repository::ShortLinkRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
