//! Port definitions (trait abstractions) for storage backends.
//!
//! Ports define the interfaces the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No backend client types (`redis`, collections internals) in any
//!   signature
//! - Traits stay minimal: the catalog only ever adds and lists

pub mod product_repository;

pub use product_repository::ProductRepository;

use thiserror::Error;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (client
/// errors, wire formats) and gives the adapters a clean surface to map to
/// their own error types.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Storage backend error (connection, command failure).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization of a stored entry failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
