//! In-memory implementation of the `ProductRepository` trait.
//!
//! The whole store sits behind one coarse mutex: id assignment and the
//! insert happen under a single lock acquisition, so concurrent `add`
//! calls can never observe the same id. Nothing is persisted; state is
//! lost on process restart.

use std::sync::Mutex;

use async_trait::async_trait;

use prodcat_core::{NewProduct, Product, ProductRepository, RepositoryError};

/// Process-local product store.
///
/// The id counter starts at 0 and is incremented before each assignment,
/// so the first product gets id 1. Products are kept in insertion order.
pub struct InMemoryProductRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    products: Vec<Product>,
    next_id: i64,
}

impl InMemoryProductRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: NewProduct) -> Result<i64, RepositoryError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.products.push(product.into_product(id));
        Ok(id)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let inner = self
            .inner
            .lock()
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(inner.products.clone())
    }
}
