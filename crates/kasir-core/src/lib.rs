//! # kasir-core: Domain Types for the Kasir API
//!
//! This crate holds the catalog domain as plain data with zero I/O
//! dependencies. Storage lives in `kasir-db`, HTTP in `apps/kasir-api`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir API Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP (axum handlers)                         │   │
//! │  │        GET/POST /api/produk   GET/PUT/DELETE /api/produk/{id}   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────────┐  │   │
//! │  │   │    types      │  │    error      │  │   seed catalog    │  │   │
//! │  │   │  Product      │  │  CoreError    │  │  3 starter items  │  │   │
//! │  │   │  ProductInput │  │               │  │                   │  │   │
//! │  │   └───────────────┘  └───────────────┘  └───────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kasir-db (Storage Layer)                        │   │
//! │  │          PostgreSQL repository, in-memory repository            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{parse_product_id, ProductInput};
//!
//! let input: ProductInput = serde_json::from_str(r#"{"nama":"Teh","harga":5000,"stok":15}"#).unwrap();
//! let product = input.into_product(4);
//! assert_eq!(product.id, 4);
//!
//! assert_eq!(parse_product_id("4").unwrap(), 4);
//! assert!(parse_product_id("abc").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use types::*;
