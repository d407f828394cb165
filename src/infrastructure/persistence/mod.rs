//! Repository implementations.
//!
//! Two families, selected at startup by the configured store backend:
//!
//! - `Memory*` - concurrent-map repositories for the default in-memory profile
//! - `Pg*` - PostgreSQL repositories using the SQLx runtime query API
//!
//! Both families provide the atomic insert-if-absent and counter-increment
//! semantics the domain traits demand.

pub mod memory_product_repository;
pub mod memory_short_link_repository;
pub mod pg_product_repository;
pub mod pg_short_link_repository;

pub use memory_product_repository::MemoryProductRepository;
pub use memory_short_link_repository::MemoryShortLinkRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
