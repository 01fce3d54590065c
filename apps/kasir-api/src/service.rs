//! Product service.
//!
//! Sits between the handlers and storage. It owns no logic beyond
//! delegation; the repository it wraps is chosen once at startup.

use std::sync::Arc;

use tracing::debug;

use kasir_core::{Product, ProductInput};
use kasir_db::{DbResult, ProductRepository};

/// Catalog operations used by the HTTP layer.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service over `repo`.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        ProductService { repo }
    }

    pub async fn create(&self, input: ProductInput) -> DbResult<Product> {
        debug!(name = %input.name, "create product");
        self.repo.create(input).await
    }

    pub async fn list(&self) -> DbResult<Vec<Product>> {
        debug!("list products");
        self.repo.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        debug!(id, "get product");
        self.repo.get_by_id(id).await
    }

    pub async fn update(&self, id: i64, input: ProductInput) -> DbResult<Product> {
        debug!(id, "update product");
        self.repo.update(id, input).await
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "delete product");
        self.repo.delete(id).await
    }
}
