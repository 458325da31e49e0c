//! Axum web adapter for the prodcat catalog service.
//!
//! Routes, handlers, error mapping and the composition root live here;
//! domain types and the repository port come from `prodcat-core`, the
//! concrete backends from `prodcat-store`.

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::{AppContext, AppState};
