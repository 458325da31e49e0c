//! Composition utilities for building product repositories.
//!
//! This module is focused purely on construction and contains no domain
//! logic. Adapters pick a backend here once at startup and hold the
//! resulting trait object for the process lifetime.

use std::sync::Arc;

use prodcat_core::ProductRepository;

use crate::binding::StoreCredentials;
use crate::repositories::{InMemoryProductRepository, RedisProductRepository};

/// Factory for creating repository instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Create the process-local in-memory backend.
    pub fn in_memory() -> Arc<dyn ProductRepository> {
        Arc::new(InMemoryProductRepository::new())
    }

    /// Connect the Redis backend.
    ///
    /// A connection or authentication failure is returned as an error;
    /// the caller treats it as fatal and must not serve traffic.
    pub async fn redis(
        credentials: &StoreCredentials,
    ) -> anyhow::Result<Arc<dyn ProductRepository>> {
        let repository = RedisProductRepository::connect(credentials).await?;
        Ok(Arc::new(repository))
    }
}
