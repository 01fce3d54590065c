//! # In-Memory Product Repository
//!
//! Process-local product store used when no database is configured.
//!
//! ## Thread Safety
//! The list and the id counter live behind one `tokio::sync::Mutex`, so
//! concurrent handlers never observe a half-applied write.
//!
//! ## Identifier Assignment
//! ```text
//! seed: [1, 2, 3]           next_id = 4
//! create "Teh"        ───►  [1, 2, 3, 4]      next_id = 5
//! delete 4            ───►  [1, 2, 3]         next_id = 5
//! create "Kopi"       ───►  [1, 2, 3, 5]      next_id = 6   (4 is never reused)
//! ```

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use kasir_core::{seed_catalog, Product, ProductInput};

use super::{ProductRepository, PRODUCT_ENTITY};
use crate::error::{DbError, DbResult};

#[derive(Debug)]
struct Catalog {
    products: Vec<Product>,
    next_id: i64,
}

/// Mutex-guarded product list.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    catalog: Mutex<Catalog>,
}

impl InMemoryProductRepository {
    /// Creates an empty store. The first product gets id 1.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Creates a store pre-filled with the seed catalog.
    pub fn seeded() -> Self {
        Self::with_products(seed_catalog())
    }

    /// Creates a store holding `products`, in order.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;

        InMemoryProductRepository {
            catalog: Mutex::new(Catalog { products, next_id }),
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
    async fn create(&self, input: ProductInput) -> DbResult<Product> {
        let mut catalog = self.catalog.lock().await;

        let id = catalog.next_id;
        catalog.next_id += 1;

        let product = input.into_product(id);
        catalog.products.push(product.clone());

        debug!(id, "Inserted product");
        Ok(product)
    }

    async fn list(&self) -> DbResult<Vec<Product>> {
        Ok(self.catalog.lock().await.products.clone())
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        self.catalog
            .lock()
            .await
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DbError::not_found(PRODUCT_ENTITY, id))
    }

    async fn update(&self, id: i64, input: ProductInput) -> DbResult<Product> {
        let mut catalog = self.catalog.lock().await;

        let product = catalog
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DbError::not_found(PRODUCT_ENTITY, id))?;
        product.apply(input);

        debug!(id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        let mut catalog = self.catalog.lock().await;

        let index = catalog
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DbError::not_found(PRODUCT_ENTITY, id))?;
        catalog.products.remove(index);

        debug!(id, "Deleted product");
        Ok(())
    }
}
