//! HTTP request handlers.

pub mod info;
pub mod products;
