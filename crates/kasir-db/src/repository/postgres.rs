//! # PostgreSQL Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! ```text
//! create     INSERT ... RETURNING        (id from BIGSERIAL)
//! list       SELECT ... ORDER BY id
//! get_by_id  SELECT ... WHERE id = $1    (no row  → NotFound)
//! update     UPDATE ... RETURNING        (no row  → NotFound)
//! delete     DELETE ... WHERE id = $1    (0 rows  → NotFound)
//! ```

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use kasir_core::{Product, ProductInput};

use super::{ProductRepository, PRODUCT_ENTITY};
use crate::error::{DbError, DbResult};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PgProductRepository::new(pool);
///
/// let created = repo.create(ProductInput::new("Teh", 5000, 15)).await?;
/// let product = repo.get_by_id(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    /// Creates a new PgProductRepository.
    pub fn new(pool: PgPool) -> Self {
        PgProductRepository { pool }
    }

    /// Counts stored products (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductInput) -> DbResult<Product> {
        debug!(name = %input.name, "Inserting product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, stock
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(PRODUCT_ENTITY, id))
    }

    async fn update(&self, id: i64, input: ProductInput) -> DbResult<Product> {
        debug!(id, "Updating product");

        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = $2,
                price = $3,
                stock = $4
            WHERE id = $1
            RETURNING id, name, price, stock
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(PRODUCT_ENTITY, id))
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(PRODUCT_ENTITY, id));
        }

        Ok(())
    }
}
