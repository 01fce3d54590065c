//! Startup wiring.
//!
//! ```text
//! DB_CONN unset ──────────────────────────► in-memory store (seeded)
//! DB_CONN set ──► connect + migrate ──ok──► PostgreSQL store
//!                        │
//!                        └──err──┬── DB_REQUIRED=true  ──► BootError (exit)
//!                                └── otherwise         ──► degraded router
//! ```
//!
//! The choice is made once; nothing is retried per request.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tracing::{info, warn};

use kasir_db::{Database, DbConfig, DbError, InMemoryProductRepository, ProductRepository};

use crate::config::AppConfig;
use crate::routes;
use crate::service::ProductService;

/// Which storage backs the catalog routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    Memory,
    Postgres,
    Degraded,
}

/// A wired application ready to serve.
pub struct App {
    pub router: Router,
    pub mode: StorageMode,
    /// Open pool, closed by the caller after the server stops.
    pub database: Option<Database>,
}

#[derive(Debug, Error)]
pub enum BootError {
    #[error("Failed to initialize database: {0}")]
    Database(#[from] DbError),
}

/// Builds the router for `config`, connecting to the database if one is
/// configured.
pub async fn bootstrap(config: &AppConfig) -> Result<App, BootError> {
    let Some(url) = config.database_url() else {
        info!("DB_CONN not set, using in-memory product store");
        return Ok(with_repository(
            Arc::new(InMemoryProductRepository::seeded()),
            StorageMode::Memory,
            None,
        ));
    };

    let db_config = DbConfig::new(url).max_connections(config.db_max_connections);

    match Database::new(db_config).await {
        Ok(db) => {
            info!("Connected to PostgreSQL");
            Ok(with_repository(
                Arc::new(db.products()),
                StorageMode::Postgres,
                Some(db),
            ))
        }
        Err(e) if config.db_required => Err(BootError::Database(e)),
        Err(e) => {
            warn!(error = %e, "Database unavailable, serving catalog routes as 503");
            Ok(App {
                router: routes::degraded_router(),
                mode: StorageMode::Degraded,
                database: None,
            })
        }
    }
}

fn with_repository(
    repo: Arc<dyn ProductRepository>,
    mode: StorageMode,
    database: Option<Database>,
) -> App {
    App {
        router: routes::router(ProductService::new(repo)),
        mode,
        database,
    }
}
