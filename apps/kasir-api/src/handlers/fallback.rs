//! Responses for requests that never reach the catalog.

use crate::error::ApiError;

/// Message returned by every catalog route in degraded mode.
pub const DATABASE_UNAVAILABLE: &str = "Database tidak tersedia";

/// Unsupported method on a known path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Unknown path.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// Catalog route while the database is unavailable.
pub async fn service_unavailable() -> ApiError {
    ApiError::unavailable(DATABASE_UNAVAILABLE)
}
