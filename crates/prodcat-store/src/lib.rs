//! Repository backend implementations for the prodcat catalog service.
//!
//! Two interchangeable [`prodcat_core::ProductRepository`] backends live
//! here: a process-local in-memory store and a Redis-backed store, plus
//! the service-binding descriptor parser and a composition factory.

#![deny(unsafe_code)]

pub mod binding;
pub mod factory;
pub mod repositories;

// Re-export factory and binding types for convenient access
pub use binding::{BindingError, StoreCredentials};
pub use factory::StoreFactory;

// Re-export repository implementations
pub use repositories::{InMemoryProductRepository, RedisProductRepository};
