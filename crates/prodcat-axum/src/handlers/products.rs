//! Product handlers - create and list.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use prodcat_core::{NewProduct, Product};

use crate::error::HttpError;
use crate::state::AppState;

/// Create a product and return its assigned id.
///
/// The body is taken raw and decoded here instead of through the `Json`
/// extractor: the contract fixes the exact 400 bodies for a malformed
/// payload vs. a failed validation, and axum's built-in rejection would
/// produce its own message.
pub async fn add(State(state): State<AppState>, body: Bytes) -> Result<Json<i64>, HttpError> {
    let product: NewProduct =
        serde_json::from_slice(&body).map_err(|_| HttpError::InvalidPayload)?;
    if !product.is_valid() {
        return Err(HttpError::InvalidProduct);
    }
    Ok(Json(state.products.add(product).await?))
}

/// List all products.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Product>>, HttpError> {
    Ok(Json(state.products.find_all().await?))
}
