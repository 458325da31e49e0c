//! Product domain types.
//!
//! `Product` is the persisted entity; `NewProduct` is the shape decoded
//! from a creation request before the repository has assigned an id.

use serde::{Deserialize, Serialize};

/// A product that has been persisted and carries a repository-assigned id.
///
/// Ids are assigned exclusively by a [`crate::ports::ProductRepository`]
/// at insertion time; they are monotonically increasing and never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Repository-assigned id (always present for persisted products).
    pub id: i64,
    /// Human-readable description. Non-empty for any persisted product.
    pub description: String,
    /// Unit price as submitted by the client.
    pub price: f64,
}

/// A product as decoded from a creation request, before validation.
///
/// Decoding tolerates missing fields (they surface as `None`) but rejects
/// structurally malformed input: a wrongly-typed field is a decode error,
/// not a validation failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl NewProduct {
    /// Whether this input may be persisted.
    ///
    /// False iff the description is absent or empty, or the price is
    /// absent. A price of zero is valid.
    pub fn is_valid(&self) -> bool {
        let has_description = self.description.as_ref().is_some_and(|d| !d.is_empty());
        has_description && self.price.is_some()
    }

    /// Attach a repository-assigned id, producing the persisted entity.
    ///
    /// Callers validate with [`Self::is_valid`] before persisting; absent
    /// fields collapse to defaults only to keep this total.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            description: self.description.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
        }
    }
}
