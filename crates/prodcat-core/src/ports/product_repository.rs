//! Product repository trait definition.
//!
//! This port defines the interface for product persistence. Backends must
//! handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProduct, Product};

/// Repository for product persistence.
///
/// The repository owns id assignment: callers never supply an id, and the
/// id sequence is monotonic and never reused. Callers validate input with
/// [`NewProduct::is_valid`] before calling [`Self::add`].
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a validated product and return its assigned id.
    ///
    /// A storage failure is `Err(RepositoryError::Storage)`; there is no
    /// recoverable error case at this layer.
    async fn add(&self, product: NewProduct) -> Result<i64, RepositoryError>;

    /// List all stored products.
    ///
    /// Order is stable across repeated calls when no writes intervene.
    /// Returns an empty vec for a fresh repository.
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
