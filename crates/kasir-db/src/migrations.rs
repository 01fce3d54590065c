//! # Database Migrations
//!
//! Embedded SQL migrations for the product catalog.
//!
//! ## Adding New Migrations
//!
//! 1. Create a new file in `crates/kasir-db/migrations/` with the next sequence number
//! 2. Name format: `NNNN_description.sql` (e.g., `0002_add_sku.sql`)
//! 3. **NEVER** modify existing migrations - always add new ones

use sqlx::PgPool;
use tracing::info;

use crate::error::DbResult;

/// Migrations embedded from `crates/kasir-db/migrations` at compile time.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Runs all pending database migrations.
///
/// Creates `_sqlx_migrations` on first run; each migration runs in its own
/// transaction, in filename order.
pub async fn run_migrations(pool: &PgPool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns (total_migrations, applied_migrations).
pub async fn migration_status(pool: &PgPool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    Ok((total, usize::try_from(applied).unwrap_or_default()))
}
