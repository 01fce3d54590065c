//! # Repository Module
//!
//! Storage implementations for the product catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  ProductService (HTTP app)                                             │
//! │       │                                                                 │
//! │       │  repo.get_by_id(4)                                             │
//! │       ▼                                                                 │
//! │  dyn ProductRepository                                                 │
//! │  ├── create(&self, input)                                              │
//! │  ├── list(&self)                                                       │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── update(&self, id, input)                                          │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       ├──────────────────────────┐                                      │
//! │       ▼                          ▼                                      │
//! │  PgProductRepository        InMemoryProductRepository                  │
//! │  (PostgreSQL table)         (Mutex<Vec<Product>>)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PgProductRepository`] - PostgreSQL-backed
//! - [`InMemoryProductRepository`] - process-local, seeded

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use kasir_core::{Product, ProductInput};

use crate::error::DbResult;

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

/// Entity name used in NotFound errors.
pub const PRODUCT_ENTITY: &str = "Product";

/// Storage contract for products.
///
/// Every lookup by id fails with [`DbError::NotFound`](crate::DbError::NotFound)
/// when the record is absent.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Stores a new product and returns it with its assigned id.
    async fn create(&self, input: ProductInput) -> DbResult<Product>;

    /// Returns every product.
    async fn list(&self) -> DbResult<Vec<Product>>;

    /// Returns the product with the given id.
    async fn get_by_id(&self, id: i64) -> DbResult<Product>;

    /// Replaces all mutable fields of an existing product.
    async fn update(&self, id: i64, input: ProductInput) -> DbResult<Product>;

    /// Removes a product.
    async fn delete(&self, id: i64) -> DbResult<()>;
}
