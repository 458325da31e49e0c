//! Shared application state type.

use std::sync::Arc;

use prodcat_core::{Info, ProductRepository};

/// Everything the handlers need: the single shared repository instance
/// selected at startup, and the static info payload.
pub struct AppContext {
    /// Product repository backend (in-memory or Redis).
    pub products: Arc<dyn ProductRepository>,
    /// Static status record served at the root route.
    pub info: Info,
}

/// Application state shared across all handlers.
pub type AppState = Arc<AppContext>;
