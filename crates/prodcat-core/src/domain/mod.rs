//! Domain types for the product catalog.
//!
//! These types are independent of any infrastructure concerns
//! (HTTP framing, storage backends).

pub mod info;
pub mod product;

pub use info::Info;
pub use product::{NewProduct, Product};
