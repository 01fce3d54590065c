//! # kasir-db: Storage Layer for the Kasir API
//!
//! This crate provides product storage. Two backends implement the same
//! [`ProductRepository`] trait:
//!
//! - PostgreSQL through sqlx (`DB_CONN` configured)
//! - A mutex-guarded in-memory list (no database configured)
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Repository trait and implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kasir_db::{Database, DbConfig, ProductRepository};
//!
//! let db = Database::new(DbConfig::new(url)).await?;
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::{InMemoryProductRepository, PgProductRepository, ProductRepository};
