//! HTTP handlers.
//!
//! - [`health`] - liveness payload, served in every mode
//! - [`product`] - catalog CRUD over [`ProductService`](crate::service::ProductService)
//! - [`fallback`] - 404 / 405 / 503 responses

pub mod fallback;
pub mod health;
pub mod product;
