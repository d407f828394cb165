//! Infrastructure layer for data persistence.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory and PostgreSQL repository implementations

pub mod persistence;
