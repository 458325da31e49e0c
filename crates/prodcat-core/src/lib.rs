//! Core domain types and port definitions for the prodcat catalog service.
//!
//! This crate holds the domain entities and the trait abstractions the
//! adapters implement. It knows nothing about HTTP or any concrete storage
//! backend.

#![deny(unsafe_code)]

pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{Info, NewProduct, Product};
pub use ports::{ProductRepository, RepositoryError};
