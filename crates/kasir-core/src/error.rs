//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  └── CoreError        - Malformed client input                         │
//! │                                                                         │
//! │  kasir-db errors (separate crate)                                      │
//! │  └── DbError          - Storage failures, missing records              │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - Status code + JSON message                     │
//! │                                                                         │
//! │  Flow: CoreError / DbError → ApiError → HTTP response                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Errors raised while interpreting client input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Path segment is not a decimal integer.
    ///
    /// ## When This Occurs
    /// - `/api/produk/abc`
    /// - `/api/produk/` (empty segment)
    /// - `/api/produk/4/extra` (nested segment)
    #[error("Invalid produk ID: '{0}'")]
    InvalidProductId(String),

    /// Request body could not be decoded into a product.
    #[error("Invalid request: {0}")]
    InvalidPayload(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
